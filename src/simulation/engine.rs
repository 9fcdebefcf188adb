// src/simulation/engine.rs
use crate::core::{Amplitudes, BasisLabel, Result, SimError};
use crate::operations::{hadamard, measure};
use crate::simulation::{Decision, DecisionSource, IterationRecord, SimulationConfig};
use crate::validation::check_normalization;
use tracing::{debug, warn};

/// Explicit state of the driving loop, threaded through [`step`].
///
/// The run is `RUNNING` while `outcome` is `None` and `COLLAPSED` once a
/// measurement has recorded a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Number of completed iterations.
    pub iteration: u64,
    /// Current qubit amplitudes.
    pub amplitudes: Amplitudes,
    /// Collapse result, set exactly once.
    pub outcome: Option<BasisLabel>,
}

impl SimulationState {
    /// The initial `RUNNING` state: iteration 0, amplitudes `|0>`.
    pub fn new() -> Self {
        Self::from_amplitudes(Amplitudes::ground())
    }

    /// A `RUNNING` state starting from arbitrary amplitudes.
    pub fn from_amplitudes(amplitudes: Amplitudes) -> Self {
        Self {
            iteration: 0,
            amplitudes,
            outcome: None,
        }
    }

    /// The collapse flag.
    pub fn is_collapsed(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one pass of the loop.
///
/// Draw order is fixed: the transform decision, then the measurement decision,
/// then (only when measuring) the measurement sample.
///
/// # Errors
/// * `SimError::InvalidConfig` if `config` fails [`SimulationConfig::validate`].
/// * `SimError::AlreadyCollapsed` if `state` is terminal.
/// * `SimError::InvalidState` from measurement of a zero state.
/// * Any error raised by `source`.
pub fn step<S: DecisionSource + ?Sized>(
    state: SimulationState,
    config: &SimulationConfig,
    source: &mut S,
) -> Result<(SimulationState, IterationRecord)> {
    config.validate()?;
    if state.is_collapsed() {
        return Err(SimError::AlreadyCollapsed { iteration: state.iteration });
    }
    let iteration = state.iteration + 1;
    let before = state.amplitudes;

    let transform_draw = source.draw()?;
    let (decision, after) = if transform_draw < config.transform_probability {
        (Decision::Transform, hadamard(&before))
    } else {
        (Decision::Hold, before)
    };

    if let Err(e) = check_normalization(&after, None) {
        warn!(iteration, error = %e, "state drifted from normalization");
    }

    let measurement_draw = source.draw()?;
    let outcome = if measurement_draw < config.measurement_probability {
        Some(measure(&after, source)?)
    } else {
        None
    };

    debug!(
        iteration,
        transform_draw,
        measurement_draw,
        decision = %decision,
        outcome = ?outcome,
        "iteration complete"
    );

    let next = SimulationState {
        iteration,
        amplitudes: after,
        outcome,
    };
    let record = IterationRecord {
        iteration,
        before,
        decision,
        after,
        transform_draw,
        measurement_draw,
        outcome,
    };
    Ok((next, record))
}

/// Lazy sequence of iteration records, ending after the terminal record.
///
/// Yields `Err` at most once; after the terminal record or an error the
/// iterator is exhausted.
#[derive(Debug)]
pub struct Evolution<S> {
    state: SimulationState,
    config: SimulationConfig,
    source: S,
    finished: bool,
}

impl<S: DecisionSource> Evolution<S> {
    /// Starts an evolution from `|0>`.
    ///
    /// # Errors
    /// * `SimError::InvalidConfig` if `config` could let the loop run forever.
    pub fn new(config: SimulationConfig, source: S) -> Result<Self> {
        Self::from_state(SimulationState::new(), config, source)
    }

    /// Starts an evolution from an arbitrary state.
    ///
    /// # Errors
    /// * `SimError::InvalidConfig` if `config` could let the loop run forever.
    pub fn from_state(state: SimulationState, config: SimulationConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(state, config, source))
    }

    /// Builds an evolution for a config the caller has already validated.
    pub(crate) fn from_validated(state: SimulationState, config: SimulationConfig, source: S) -> Self {
        let finished = state.is_collapsed();
        Self {
            state,
            config,
            source,
            finished,
        }
    }

    /// The loop state after the most recently yielded record.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Gives back the decision source, e.g. to inspect how much was drawn.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: DecisionSource> Iterator for Evolution<S> {
    type Item = Result<IterationRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match step(self.state, &self.config, &mut self.source) {
            Ok((state, record)) => {
                self.state = state;
                self.finished = state.is_collapsed();
                Some(Ok(record))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: DecisionSource> std::iter::FusedIterator for Evolution<S> {}
