// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// One of the two distinguishable measurement outcomes of the qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BasisLabel {
    /// The `|0>` basis state.
    Zero,
    /// The `|1>` basis state.
    One,
}

impl BasisLabel {
    /// Both labels, in basis order.
    pub const ALL: [BasisLabel; 2] = [BasisLabel::Zero, BasisLabel::One];

    /// Index of the label in the computational basis (0 or 1).
    pub fn index(&self) -> usize {
        match self {
            BasisLabel::Zero => 0,
            BasisLabel::One => 1,
        }
    }
}

impl fmt::Display for BasisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisLabel::Zero => write!(f, "|0>"),
            BasisLabel::One => write!(f, "|1>"),
        }
    }
}

/// The state vector of a single qubit: one complex amplitude per basis label.
///
/// Normalization (`|zero|² + |one|² = 1`) is intended but not enforced; the
/// transform preserves it and measurement renormalizes before sampling.
/// Values are replaced wholesale by each operation rather than patched in place.
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct Amplitudes {
    /// Amplitude of `|0>`.
    pub zero: Complex<f64>,
    /// Amplitude of `|1>`.
    pub one: Complex<f64>,
}

impl Amplitudes {
    /// Creates a state from the two amplitudes. No validation is performed.
    pub fn new(zero: Complex<f64>, one: Complex<f64>) -> Self {
        Self { zero, one }
    }

    /// The starting state `|0>`, amplitudes (1+0i, 0+0i).
    pub fn ground() -> Self {
        Self::new(Complex::one(), Complex::zero())
    }

    /// Returns the amplitude associated with `label`.
    pub fn amplitude(&self, label: BasisLabel) -> Complex<f64> {
        match label {
            BasisLabel::Zero => self.zero,
            BasisLabel::One => self.one,
        }
    }

    /// Squared magnitude of the amplitude for `label`. Not renormalized.
    pub fn probability(&self, label: BasisLabel) -> f64 {
        self.amplitude(label).norm_sqr()
    }

    /// `(|zero|², |one|²)` as stored, without renormalization.
    pub fn probabilities(&self) -> (f64, f64) {
        (self.zero.norm_sqr(), self.one.norm_sqr())
    }

    /// Sum of both squared magnitudes.
    pub fn total_probability(&self) -> f64 {
        let (p0, p1) = self.probabilities();
        p0 + p1
    }

    /// Component-wise comparison within `tolerance` (distance in the complex plane).
    pub fn approx_eq(&self, other: &Amplitudes, tolerance: f64) -> bool {
        (self.zero - other.zero).norm() <= tolerance && (self.one - other.one).norm() <= tolerance
    }
}

impl Default for Amplitudes {
    fn default() -> Self {
        Self::ground()
    }
}

impl fmt::Display for Amplitudes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[|0>: {:.4}, |1>: {:.4}]", self.zero, self.one)
    }
}
