// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

pub use error::{Result, SimError};
pub use state::{Amplitudes, BasisLabel};

pub mod constants;
pub use constants::{DEFAULT_MEASUREMENT_PROBABILITY, DEFAULT_TRANSFORM_PROBABILITY, FRAC_1_SQRT_2};
