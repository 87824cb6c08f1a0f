//! User-controlled parameters and their widget ranges.
//!
//! # Responsibility
//! - Clamp raw widget values into the ranges the signal views expect.
//!
//! # Invariants
//! - `Intensity` is always within [0, 1].
//! - `CoherenceTime` is always within [1, 100] milliseconds.
//! - Deserialization goes through the same clamping as `clamped`.

use serde::{Deserialize, Serialize};

pub const INTENSITY_MIN: f64 = 0.0;
pub const INTENSITY_MAX: f64 = 1.0;
pub const DEFAULT_INTENSITY: f64 = 0.5;

pub const COHERENCE_TIME_MIN_MS: i64 = 1;
pub const COHERENCE_TIME_MAX_MS: i64 = 100;
pub const DEFAULT_COHERENCE_TIME_MS: i64 = 50;

/// Number of notes shown by the journal view.
pub const RECENT_NOTES_COUNT: i64 = 5;

/// Collapse intensity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Intensity(f64);

impl Intensity {
    /// Clamps a raw slider value. NaN falls back to the default.
    pub fn clamped(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::default();
        }
        Self(raw.clamp(INTENSITY_MIN, INTENSITY_MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(DEFAULT_INTENSITY)
    }
}

impl From<f64> for Intensity {
    fn from(raw: f64) -> Self {
        Self::clamped(raw)
    }
}

impl From<Intensity> for f64 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

/// Coherence time in whole milliseconds, within [1, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct CoherenceTime(i64);

impl CoherenceTime {
    pub fn clamped(raw_ms: i64) -> Self {
        Self(raw_ms.clamp(COHERENCE_TIME_MIN_MS, COHERENCE_TIME_MAX_MS))
    }

    pub fn millis(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Default for CoherenceTime {
    fn default() -> Self {
        Self(DEFAULT_COHERENCE_TIME_MS)
    }
}

impl From<i64> for CoherenceTime {
    fn from(raw_ms: i64) -> Self {
        Self::clamped(raw_ms)
    }
}

impl From<CoherenceTime> for i64 {
    fn from(value: CoherenceTime) -> Self {
        value.0
    }
}
