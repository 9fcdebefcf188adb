// src/simulation/mod.rs

//! Drives the qubit through repeated, randomly chosen Hadamard transforms
//! until a randomly timed measurement collapses it.
//!
//! [`step`] is the pure single-iteration function, [`Evolution`] turns it into
//! a lazy iterator of [`IterationRecord`]s, and [`Simulator`] consumes that
//! iterator into a [`SimulationResult`].

mod config;
mod engine;
mod results;
mod source;

pub use config::SimulationConfig;
pub use engine::{Evolution, SimulationState, step};
pub use results::{Decision, IterationRecord, SimulationResult};
pub use source::{DecisionSource, ScriptedSource, SeededSource};

use crate::core::{Result, SimError};
use tracing::info;

/// Runs complete simulations for a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator after validating `config`.
    ///
    /// # Errors
    /// * `SimError::InvalidConfig` if a probability is out of range.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the pseudo-random source this simulator's config asks for.
    pub fn source(&self) -> SeededSource {
        match self.config.seed {
            Some(seed) => SeededSource::new(seed),
            None => SeededSource::from_entropy(),
        }
    }

    /// Runs to collapse with the configured seed (or a fresh one).
    ///
    /// The seed actually used is recorded in the result.
    pub fn run(&self) -> Result<SimulationResult> {
        let source = self.source();
        let seed = source.seed();
        info!(seed, "starting simulation");
        Ok(self.run_with(source)?.with_seed(seed))
    }

    /// Runs to collapse, drawing every decision from `source`.
    pub fn run_with<S: DecisionSource>(&self, source: S) -> Result<SimulationResult> {
        collect_run(self.evolve(source))
    }

    /// Lazily yields iteration records from `|0>` until collapse.
    pub fn evolve<S: DecisionSource>(&self, source: S) -> Evolution<S> {
        Evolution::from_validated(SimulationState::new(), self.config, source)
    }
}

/// Drains `evolution` into a result, stopping at the terminal record.
///
/// An evolution built by [`Simulator::evolve`] always ends on a terminal
/// record or an error; one started from a collapsed state yields nothing and
/// is reported as `EndedWithoutCollapse`.
fn collect_run<S: DecisionSource>(evolution: Evolution<S>) -> Result<SimulationResult> {
    let mut records = Vec::new();
    for record in evolution {
        let record = record?;
        let outcome = record.outcome;
        records.push(record);
        if let Some(outcome) = outcome {
            info!(iterations = records.len(), outcome = %outcome, "simulation collapsed");
            return Ok(SimulationResult::new(records, outcome));
        }
    }
    Err(SimError::EndedWithoutCollapse {
        iterations: records.len(),
    })
}
