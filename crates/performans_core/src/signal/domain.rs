//! Evenly spaced sample domains.

use serde::{Deserialize, Serialize};

/// Default number of samples for every preset domain.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Upper bound on samples per axis accepted from configuration.
pub const MAX_SAMPLE_COUNT: usize = 5000;

/// Ordered, evenly spaced sample points with both endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    samples: Vec<f64>,
}

impl Domain {
    /// Builds `count` points from `start` to `end` inclusive.
    ///
    /// `count == 0` yields an empty domain and `count == 1` yields `[start]`.
    /// The last sample is pinned to `end` so no rounding drift reaches it.
    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        let samples = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                let mut samples: Vec<f64> =
                    (0..count).map(|idx| start + idx as f64 * step).collect();
                samples[count - 1] = end;
                samples
            }
        };
        Self { samples }
    }

    /// Position axis used by the collapse and stationary views: [-5, 5].
    pub fn position(count: usize) -> Self {
        Self::linspace(-5.0, 5.0, count)
    }

    /// Time axis in milliseconds used by the decoherence view: [0, 100].
    pub fn time(count: usize) -> Self {
        Self::linspace(0.0, 100.0, count)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Domain, DEFAULT_SAMPLE_COUNT};

    #[test]
    fn linspace_includes_both_endpoints() {
        let domain = Domain::position(DEFAULT_SAMPLE_COUNT);
        assert_eq!(domain.len(), 1000);
        assert_eq!(domain.samples()[0], -5.0);
        assert_eq!(domain.samples()[999], 5.0);
    }

    #[test]
    fn linspace_is_evenly_spaced() {
        let domain = Domain::linspace(0.0, 1.0, 5);
        assert_eq!(domain.samples(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn degenerate_counts() {
        assert!(Domain::time(0).is_empty());
        assert_eq!(Domain::time(1).samples(), &[0.0]);
    }
}
