//! Error handling logic

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Failures raised while transforming, measuring, or stepping the qubit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Measurement was attempted on a state with no normalizable probability mass
    /// (both amplitudes zero), or the normalization check found the state off.
    #[error("Invalid state: total probability {total_probability} cannot be normalized")]
    InvalidState {
        /// Sum of squared amplitude magnitudes at the time of the failure.
        total_probability: f64,
    },

    /// A simulation parameter is outside its allowed range.
    #[error("Invalid configuration '{parameter}': {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        parameter: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A scripted decision source ran out of values.
    #[error("Decision source exhausted after {draws} draws")]
    SourceExhausted {
        /// Number of values successfully handed out before running dry.
        draws: usize,
    },

    /// A run's record stream ended before any measurement collapsed the qubit.
    #[error("Run ended after {iterations} iterations without a collapse")]
    EndedWithoutCollapse {
        /// Number of records seen before the stream ended.
        iterations: usize,
    },

    /// `step` was called on a state that has already collapsed.
    #[error("State already collapsed at iteration {iteration}")]
    AlreadyCollapsed {
        /// Iteration on which the collapse happened.
        iteration: u64,
    },
}

impl SimError {
    /// Create an invalid state error for the given total probability.
    pub fn invalid_state(total_probability: f64) -> Self {
        Self::InvalidState { total_probability }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
