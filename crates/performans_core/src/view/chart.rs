//! Chart assembly over the signal generator.

use crate::error::InvalidInputError;
use crate::params::{CoherenceTime, Intensity};
use crate::signal::{
    base_wave, coherence_decay, coherence_envelope, collapsed_wave, probability_density,
    stationary_density, Domain,
};
use serde::{Deserialize, Serialize};

/// Which illustrative chart a view carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    WaveCollapse,
    CoherenceDecay,
    StationaryDensity,
}

/// One named curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Returns the `(x, y)` sample with the largest `y`, if any.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.x
            .iter()
            .copied()
            .zip(self.y.iter().copied())
            .fold(None, |best, (x, y)| match best {
                Some((_, best_y)) if best_y >= y => best,
                _ => Some((x, y)),
            })
    }
}

/// Titled overlay of series sharing one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<Series>,
}

/// Density before and after the intensity-driven collapse.
pub fn collapse_chart(domain: &Domain, intensity: Intensity) -> Chart {
    let x = domain.samples();
    let before = probability_density(&base_wave(x));
    let after = probability_density(&collapsed_wave(x, intensity.value()));
    Chart {
        kind: ChartKind::WaveCollapse,
        title: "Quantum collapse simulation".to_string(),
        series: vec![
            Series::new("Before collapse (superposition)", x.to_vec(), before),
            Series::new("After collapse (with intention)", x.to_vec(), after),
        ],
    }
}

/// Damped coherence signal together with its envelope.
///
/// # Errors
/// - `NonPositiveCoherenceTime` when the coherence time is not a positive,
///   finite number of milliseconds.
pub fn decoherence_chart(
    domain: &Domain,
    coherence: CoherenceTime,
) -> Result<Chart, InvalidInputError> {
    let x = domain.samples();
    let tau = coherence.as_f64();
    let signal = coherence_decay(x, tau)?;
    let envelope = coherence_envelope(x, tau)?;
    Ok(Chart {
        kind: ChartKind::CoherenceDecay,
        title: format!("Decoherence (coherence time {} ms)", coherence.millis()),
        series: vec![
            Series::new("Coherence", x.to_vec(), signal),
            Series::new("Envelope", x.to_vec(), envelope),
        ],
    })
}

/// Stationary ground-state density over a harmonic potential.
pub fn stationary_chart(domain: &Domain) -> Chart {
    let x = domain.samples();
    let stationary = stationary_density(x);
    Chart {
        kind: ChartKind::StationaryDensity,
        title: "Stationary state in a harmonic potential".to_string(),
        series: vec![
            Series::new("|ψ(x)|²", x.to_vec(), stationary.density),
            Series::new("V(x) = 0.5x²", x.to_vec(), stationary.potential),
        ],
    }
}
