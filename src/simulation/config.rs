// src/simulation/config.rs

use crate::core::{DEFAULT_MEASUREMENT_PROBABILITY, DEFAULT_TRANSFORM_PROBABILITY, Result, SimError};

/// Parameters of the driving loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Chance per iteration of applying the Hadamard transform.
    pub transform_probability: f64,
    /// Chance per iteration of measuring, which ends the run.
    pub measurement_probability: f64,
    /// Seed for the pseudo-random source. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            transform_probability: DEFAULT_TRANSFORM_PROBABILITY,
            measurement_probability: DEFAULT_MEASUREMENT_PROBABILITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Sets the per-iteration transform chance.
    pub fn with_transform_probability(mut self, probability: f64) -> Self {
        self.transform_probability = probability;
        self
    }

    /// Sets the per-iteration measurement chance.
    pub fn with_measurement_probability(mut self, probability: f64) -> Self {
        self.measurement_probability = probability;
        self
    }

    /// Fixes the seed so the run is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that both probabilities lie in `[0, 1]` and that measurement can
    /// actually happen, so the loop terminates with probability 1.
    pub fn validate(&self) -> Result<()> {
        check_probability("transform_probability", self.transform_probability)?;
        check_probability("measurement_probability", self.measurement_probability)?;
        if self.measurement_probability == 0.0 {
            return Err(SimError::invalid_config(
                "measurement_probability",
                "must be greater than 0 or the run never ends",
            ));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(SimError::invalid_config(
            name,
            format!("{} is not a probability in [0, 1]", value),
        ));
    }
    Ok(())
}
