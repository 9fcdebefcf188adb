//! Numerical constants used by the transform and the driving loop.

/// Scaling factor of the Hadamard map, `1/√2`.
pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Default chance per iteration of applying the Hadamard transform.
pub const DEFAULT_TRANSFORM_PROBABILITY: f64 = 0.5;

/// Default chance per iteration of measuring (and collapsing) the state.
pub const DEFAULT_MEASUREMENT_PROBABILITY: f64 = 0.2;

/// Allowed deviation of `|a0|² + |a1|²` from 1.0 before a drift warning.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
