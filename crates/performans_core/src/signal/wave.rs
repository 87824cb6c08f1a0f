//! Closed-form toy wave transforms.
//!
//! All functions map a pre-sampled domain elementwise. None of them cache:
//! the session recomputes every curve per view.

use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Period of the decoherence oscillation, in the same unit as the time axis.
const DECAY_OSCILLATION_PERIOD: f64 = 10.0;

/// Gaussian-enveloped oscillation `exp(-x²/2) · cos(5x)`.
pub fn base_wave(domain: &[f64]) -> Vec<f64> {
    domain.iter().map(|&x| base_sample(x)).collect()
}

/// Base wave modulated by an intensity term: `ψ(x) · (1 + i · sin(10x))`.
///
/// No range check is applied to `intensity`; callers clamp it into [0, 1]
/// (see [`crate::params::Intensity`]).
pub fn collapsed_wave(domain: &[f64], intensity: f64) -> Vec<f64> {
    domain
        .iter()
        .map(|&x| base_sample(x) * (1.0 + intensity * (10.0 * x).sin()))
        .collect()
}

/// Element-wise squared magnitude `|ψ(x)|²`.
pub fn probability_density(sequence: &[f64]) -> Vec<f64> {
    sequence.iter().map(|&value| value * value).collect()
}

/// Damped oscillation `exp(-t/τ) · cos(2πt/10)`.
///
/// # Errors
/// - `NonPositiveCoherenceTime` when `coherence_time_ms` is not a finite
///   positive number.
pub fn coherence_decay(
    domain: &[f64],
    coherence_time_ms: f64,
) -> Result<Vec<f64>, InvalidInputError> {
    ensure_positive_coherence(coherence_time_ms)?;
    Ok(domain
        .iter()
        .map(|&t| (-t / coherence_time_ms).exp() * (TAU * t / DECAY_OSCILLATION_PERIOD).cos())
        .collect())
}

/// The `exp(-t/τ)` envelope of [`coherence_decay`] on its own.
pub fn coherence_envelope(
    domain: &[f64],
    coherence_time_ms: f64,
) -> Result<Vec<f64>, InvalidInputError> {
    ensure_positive_coherence(coherence_time_ms)?;
    Ok(domain
        .iter()
        .map(|&t| (-t / coherence_time_ms).exp())
        .collect())
}

/// Ground-state-like density overlaid on a harmonic potential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationaryDensity {
    /// `exp(-x²) / √π`
    pub density: Vec<f64>,
    /// `0.5 · x²`
    pub potential: Vec<f64>,
}

/// Builds the stationary density and the potential over the same domain.
pub fn stationary_density(domain: &[f64]) -> StationaryDensity {
    let norm = PI.sqrt();
    StationaryDensity {
        density: domain.iter().map(|&x| (-x * x).exp() / norm).collect(),
        potential: domain.iter().map(|&x| 0.5 * x * x).collect(),
    }
}

fn base_sample(x: f64) -> f64 {
    (-x * x / 2.0).exp() * (5.0 * x).cos()
}

fn ensure_positive_coherence(coherence_time_ms: f64) -> Result<(), InvalidInputError> {
    if coherence_time_ms.is_finite() && coherence_time_ms > 0.0 {
        Ok(())
    } else {
        Err(InvalidInputError::NonPositiveCoherenceTime(
            coherence_time_ms,
        ))
    }
}
