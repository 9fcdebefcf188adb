// src/operations/mod.rs

//! The two operations that act on a qubit state: the Hadamard transform and
//! Born-rule measurement.
//!
//! Both are free functions over [`Amplitudes`]. Neither mutates its input; the
//! transform returns a fresh state and measurement only reads the amplitudes.

use crate::core::{Amplitudes, BasisLabel, FRAC_1_SQRT_2, Result, SimError};
use crate::simulation::DecisionSource;
use std::fmt;

/// Applies the Hadamard map.
///
/// ```text
/// zero' = (zero + one) / √2
/// one'  = (zero - one) / √2
/// ```
///
/// Total for all finite inputs; normalization is neither checked nor required.
pub fn hadamard(state: &Amplitudes) -> Amplitudes {
    Amplitudes::new(
        (state.zero + state.one) * FRAC_1_SQRT_2,
        (state.zero - state.one) * FRAC_1_SQRT_2,
    )
}

/// Measures `state`, returning the label it collapses to.
///
/// The squared magnitudes are renormalized to sum to one, then a single draw
/// `r` from `source` selects `Zero` when `r < p0` and `One` otherwise.
///
/// # Errors
/// * `SimError::InvalidState` if the total probability is zero (or not finite).
///   No value is drawn from `source` in that case.
/// * Any error raised by `source` itself.
pub fn measure<S: DecisionSource + ?Sized>(state: &Amplitudes, source: &mut S) -> Result<BasisLabel> {
    let (p0, p1) = state.probabilities();
    let total = p0 + p1;
    if total == 0.0 || !total.is_finite() {
        return Err(SimError::invalid_state(total));
    }
    let p0 = p0 / total;

    let r = source.draw()?;
    Ok(if r < p0 { BasisLabel::Zero } else { BasisLabel::One })
}

/// Measures independent copies of the same `state` `shots` times.
///
/// The state is not collapsed between shots; each shot consumes one draw.
pub fn sample_counts<S: DecisionSource + ?Sized>(
    state: &Amplitudes,
    shots: usize,
    source: &mut S,
) -> Result<OutcomeCounts> {
    let mut counts = OutcomeCounts::default();
    for _ in 0..shots {
        counts.record(measure(state, source)?);
    }
    Ok(counts)
}

/// Tally of measurement outcomes per basis label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    counts: [usize; 2],
}

impl OutcomeCounts {
    /// Adds one observation of `label`.
    pub fn record(&mut self, label: BasisLabel) {
        self.counts[label.index()] += 1;
    }

    /// Number of times `label` was observed.
    pub fn count(&self, label: BasisLabel) -> usize {
        self.counts[label.index()]
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Observed share of `label`; 0.0 when nothing has been recorded.
    pub fn frequency(&self, label: BasisLabel) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.count(label) as f64 / n as f64,
        }
    }

    /// Pearson chi-square statistic (1 degree of freedom) against an expected
    /// probability `expected_p0` of observing `|0>`.
    pub fn chi_square(&self, expected_p0: f64) -> f64 {
        let n = self.total() as f64;
        [expected_p0, 1.0 - expected_p0]
            .iter()
            .zip(self.counts.iter())
            .filter(|(p, _)| **p > 0.0)
            .map(|(p, &observed)| {
                let expected = n * p;
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}: {}",
            BasisLabel::Zero,
            self.count(BasisLabel::Zero),
            BasisLabel::One,
            self.count(BasisLabel::One)
        )
    }
}
