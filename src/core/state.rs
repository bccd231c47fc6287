// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

use super::error::CircuitError;

/// The amplitude vector of an n-qubit register.
///
/// Holds exactly 2^n complex amplitudes, indexed by the binary encoding
/// of a basis state: bit `i` of the index is qubit `i`'s classical
/// value, so index 0 is |0…0⟩. After any sequence of supported gates
/// applied to a normalized starting vector, Σ|c_k|² stays 1 within
/// 1e-6 (see `validation::check_normalization`).
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Creates the |0…0⟩ state for `num_qubits` qubits: amplitude 1+0i
    /// at index 0, zero everywhere else.
    pub fn zero(num_qubits: usize) -> Result<Self, CircuitError> {
        let dim = dimension_for(num_qubits)?;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Ok(Self { amplitudes })
    }

    /// Builds a state vector from a literal amplitude list.
    ///
    /// The amplitudes are taken verbatim — puzzle authors pre-normalize
    /// their data and the engine never re-normalizes. Only the length
    /// is checked: it must be a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Result<Self, CircuitError> {
        if amplitudes.is_empty() || !amplitudes.len().is_power_of_two() {
            return Err(CircuitError::InvalidCircuit {
                message: format!(
                    "state vector length {} is not a power of two",
                    amplitudes.len()
                ),
            });
        }
        Ok(Self { amplitudes })
    }

    /// Wraps an amplitude vector whose length is already known to be a
    /// power of two (the gate applicator always preserves length).
    pub(crate) fn from_raw(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of basis states represented (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits this vector describes.
    pub fn num_qubits(&self) -> usize {
        self.amplitudes.len().trailing_zeros() as usize
    }

    /// Sum of squared magnitudes, Σ(re² + im²).
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Measurement probability per basis state, |c_k|².
    ///
    /// This is the read surface the rendering layer draws its
    /// per-basis-state probability list from.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

/// Dimension of the state space for `num_qubits` qubits (2^n), with
/// overflow and zero-qubit configurations rejected.
pub(crate) fn dimension_for(num_qubits: usize) -> Result<usize, CircuitError> {
    if num_qubits == 0 {
        return Err(CircuitError::InvalidCircuit {
            message: "cannot simulate a zero-qubit register".to_string(),
        });
    }
    1usize.checked_shl(num_qubits as u32).ok_or_else(|| CircuitError::InvalidCircuit {
        message: format!(
            "{} qubits would overflow the state vector dimension",
            num_qubits
        ),
    })
}
