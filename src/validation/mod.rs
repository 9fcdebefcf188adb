// src/validation/mod.rs

//! Provides functions to validate [`Amplitudes`] against the normalization
//! the transform is expected to preserve.

use crate::core::constants::DEFAULT_NORM_TOLERANCE;
use crate::core::{Amplitudes, Result, SimError};

/// Distance of the total probability from 1.0.
pub fn normalization_drift(state: &Amplitudes) -> f64 {
    (state.total_probability() - 1.0).abs()
}

/// Checks if the state vector is normalized (`|zero|² + |one|² ≈ 1.0`).
///
/// # Arguments
/// * `state` - The state to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `1e-9`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(SimError::InvalidState)` carrying the observed total otherwise.
pub fn check_normalization(state: &Amplitudes, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    // A NaN drift fails the comparison and lands in the error branch.
    if normalization_drift(state) <= effective_tolerance {
        Ok(())
    } else {
        Err(SimError::invalid_state(state.total_probability()))
    }
}
