// src/puzzles/mod.rs

//! Static puzzle reference data: the state a lesson starts from, the
//! target the player must reach, the tolerance the comparison uses,
//! and the reward the progression layer pays out on a pass.
//!
//! Puzzles are read-only once built. Authored amplitude lists are
//! taken verbatim — the engine never re-normalizes them.

use crate::core::{CircuitError, StateVector};
use crate::validation::DEFAULT_MATCH_TOLERANCE;
use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

/// One lesson's reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    initial_state: StateVector,
    target_state: StateVector,
    tolerance: f64,
    reward: u32,
}

impl Puzzle {
    /// Builds a puzzle from authored states.
    ///
    /// Initial and target must agree on dimension; nothing else about
    /// the amplitudes is checked.
    pub fn new(
        initial_state: StateVector,
        target_state: StateVector,
        tolerance: f64,
        reward: u32,
    ) -> Result<Self, CircuitError> {
        if initial_state.dim() != target_state.dim() {
            return Err(CircuitError::DimensionMismatch {
                expected: initial_state.dim(),
                actual: target_state.dim(),
            });
        }
        Ok(Self {
            initial_state,
            target_state,
            tolerance,
            reward,
        })
    }

    /// The state evolution starts from.
    pub fn initial_state(&self) -> &StateVector {
        &self.initial_state
    }

    /// The state the player must reach.
    pub fn target_state(&self) -> &StateVector {
        &self.target_state
    }

    /// Per-amplitude distance tolerance for the comparison.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// XP granted on a pass. Opaque to the engine; the progression
    /// layer reads it off the puzzle after a successful check.
    pub fn reward(&self) -> u32 {
        self.reward
    }

    // --- Built-in lessons ---
    // Amplitude literals below are powers of two long by construction,
    // so they skip `from_amplitudes` length validation.

    /// Lesson: flip |0⟩ to |1⟩ with a single X.
    pub fn bit_flip() -> Self {
        Self {
            initial_state: StateVector::from_raw(vec![one(), zero()]),
            target_state: StateVector::from_raw(vec![zero(), one()]),
            tolerance: DEFAULT_MATCH_TOLERANCE,
            reward: 50,
        }
    }

    /// Lesson: split |0⟩ into an equal superposition with H.
    pub fn superposition() -> Self {
        let half = Complex::new(FRAC_1_SQRT_2, 0.0);
        Self {
            initial_state: StateVector::from_raw(vec![one(), zero()]),
            target_state: StateVector::from_raw(vec![half, half]),
            tolerance: DEFAULT_MATCH_TOLERANCE,
            reward: 75,
        }
    }

    /// Lesson: entangle |00⟩ into (|00⟩ + |11⟩)/√2 with H then CNOT.
    pub fn bell_pair() -> Self {
        let half = Complex::new(FRAC_1_SQRT_2, 0.0);
        Self {
            initial_state: StateVector::from_raw(vec![one(), zero(), zero(), zero()]),
            target_state: StateVector::from_raw(vec![half, zero(), zero(), half]),
            tolerance: DEFAULT_MATCH_TOLERANCE,
            reward: 150,
        }
    }
}

fn zero() -> Complex<f64> {
    Complex::new(0.0, 0.0)
}

fn one() -> Complex<f64> {
    Complex::new(1.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mismatched_dimensions() {
        let initial = StateVector::zero(1).unwrap();
        let target = StateVector::zero(2).unwrap();
        let err = Puzzle::new(initial, target, DEFAULT_MATCH_TOLERANCE, 10).unwrap_err();
        assert_eq!(
            err,
            CircuitError::DimensionMismatch {
                expected: 2,
                actual: 4
            }
        );
    }

    #[test]
    fn built_in_lessons_are_normalized() {
        for puzzle in [Puzzle::bit_flip(), Puzzle::superposition(), Puzzle::bell_pair()] {
            assert!((puzzle.initial_state().norm_sqr() - 1.0).abs() < 1e-9);
            assert!((puzzle.target_state().norm_sqr() - 1.0).abs() < 1e-9);
            assert!(puzzle.reward() > 0);
        }
    }
}
