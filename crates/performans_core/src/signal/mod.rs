//! Parametric signal generation.
//!
//! # Responsibility
//! - Sample fixed 1-D domains.
//! - Map (domain, scalar parameters) to toy wave and density curves.
//!
//! # Invariants
//! - Every transform is a pure elementwise closed form: same input, same bits.
//! - Output length always equals domain length.
//! - Outputs are illustrative and never normalized.

pub mod domain;
pub mod wave;

pub use domain::Domain;
pub use wave::{
    base_wave, coherence_decay, coherence_envelope, collapsed_wave, probability_density,
    stationary_density, StationaryDensity,
};
