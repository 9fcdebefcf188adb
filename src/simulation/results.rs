// src/simulation/results.rs
use crate::core::{Amplitudes, BasisLabel};
use std::fmt;

/// Outcome of the transform draw in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The Hadamard transform was applied.
    Transform,
    /// The state was left unchanged.
    Hold,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Transform => write!(f, "apply Hadamard"),
            Decision::Hold => write!(f, "hold"),
        }
    }
}

/// Everything that happened during one pass of the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    /// 1-based iteration number.
    pub iteration: u64,
    /// State at the start of the iteration.
    pub before: Amplitudes,
    /// Whether the transform was applied.
    pub decision: Decision,
    /// State after the (possible) transform; the state that was measured, if any.
    pub after: Amplitudes,
    /// Value drawn for the transform decision.
    pub transform_draw: f64,
    /// Value drawn for the measurement decision.
    pub measurement_draw: f64,
    /// Collapse result, present only on the terminal record.
    pub outcome: Option<BasisLabel>,
}

impl IterationRecord {
    /// True when measurement happened in this iteration, ending the run.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Holds the full trace and final outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    seed: Option<u64>,
    records: Vec<IterationRecord>,
    outcome: BasisLabel,
}

impl SimulationResult {
    /// Builds a result from the collected records. (Internal visibility)
    pub(crate) fn new(records: Vec<IterationRecord>, outcome: BasisLabel) -> Self {
        Self {
            seed: None,
            records,
            outcome,
        }
    }

    /// Attaches the seed the run was drawn from. (Internal visibility)
    pub(crate) fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed of the pseudo-random source, when the run used one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Label the qubit collapsed to.
    pub fn outcome(&self) -> BasisLabel {
        self.outcome
    }

    /// Per-iteration trace, in order. The last record is terminal.
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Number of loop passes before collapse (inclusive).
    pub fn iterations(&self) -> usize {
        self.records.len()
    }

    /// How many iterations applied the transform.
    pub fn transform_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.decision == Decision::Transform)
            .count()
    }

    /// The state that was measured.
    pub fn final_amplitudes(&self) -> Amplitudes {
        self.records
            .last()
            .map(|r| r.after)
            .unwrap_or_default()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        if let Some(seed) = self.seed {
            writeln!(f, "  Seed: {}", seed)?;
        }
        writeln!(
            f,
            "  Iterations: {} ({} Hadamard applications)",
            self.iterations(),
            self.transform_count()
        )?;
        writeln!(f, "  Measured state: {}", self.final_amplitudes())?;
        writeln!(f, "  Collapsed to: {}", self.outcome)
    }
}
