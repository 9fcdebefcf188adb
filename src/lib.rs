// src/lib.rs

//! `hadamard_collapse` - A single-qubit Hadamard walk with probabilistic collapse
//!
//! A qubit starts in `|0>`. On every iteration a coin decides whether the
//! Hadamard transform is applied, and a second coin decides whether the qubit
//! is measured. Measurement samples a basis label with Born-rule weights and
//! ends the run.
//!
//! All randomness flows through a [`DecisionSource`], so a run can be replayed
//! from a seed ([`SeededSource`]) or from a fixed list of values
//! ([`ScriptedSource`]).

pub mod core;
pub mod operations;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{Amplitudes, BasisLabel, Result, SimError};
pub use crate::operations::{OutcomeCounts, hadamard, measure, sample_counts};
pub use crate::simulation::{
    Decision, DecisionSource, Evolution, IterationRecord, ScriptedSource, SeededSource, SimulationConfig,
    SimulationResult, SimulationState, Simulator, step,
};
pub use crate::validation::{check_normalization, normalization_drift};

// Example 1: Superposition and measurement
// One Hadamard turns |0> into an equal superposition; a scripted draw picks the outcome.
/// ```
/// use hadamard_collapse::{hadamard, measure, Amplitudes, BasisLabel, ScriptedSource, SimError};
///
/// let plus = hadamard(&Amplitudes::ground());
/// let (p0, p1) = plus.probabilities();
/// assert!((p0 - 0.5).abs() < 1e-12);
/// assert!((p1 - 0.5).abs() < 1e-12);
///
/// // r = 0.25 < p0, so the qubit collapses to |0>
/// let mut source = ScriptedSource::new([0.25]);
/// assert_eq!(measure(&plus, &mut source)?, BasisLabel::Zero);
///
/// // H is its own inverse
/// assert!(hadamard(&plus).approx_eq(&Amplitudes::ground(), 1e-12));
/// # Ok::<(), SimError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: A reproducible run
// The same seed always yields the same trace and the same collapse label.
/// ```
/// use hadamard_collapse::{SimulationConfig, Simulator, SimError};
///
/// let simulator = Simulator::new(SimulationConfig::default().with_seed(2024))?;
/// let first = simulator.run()?;
/// let second = simulator.run()?;
///
/// assert_eq!(first, second);
/// assert!(first.records().last().is_some_and(|r| r.is_terminal()));
/// println!("{}", first);
/// # Ok::<(), SimError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
