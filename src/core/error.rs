//! Error handling logic

use std::fmt;

/// Error types for circuit configuration and state construction.
///
/// Everything the engine can reject is a configuration problem caught
/// before any state is mutated; once a gate is on the circuit, its
/// application cannot fail. Validation mismatches are not errors — the
/// puzzle validator reports them as a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum CircuitError {
    /// A gate was built with inconsistent qubit arguments
    /// (e.g. a CNOT whose control equals its target).
    InvalidGate {
        /// InvalidGate failure message
        message: String,
    },

    /// A gate references a qubit index outside the circuit's range.
    QubitOutOfRange {
        /// The offending qubit index
        qubit: usize,
        /// The circuit's fixed qubit count
        num_qubits: usize,
    },

    /// A state vector's length does not match the expected dimension.
    DimensionMismatch {
        /// Expected number of amplitudes (2^n)
        expected: usize,
        /// Number of amplitudes actually provided
        actual: usize,
    },

    /// The circuit configuration itself is unusable
    /// (zero qubits, or a qubit count whose dimension overflows).
    InvalidCircuit {
        /// InvalidCircuit failure message
        message: String,
    },

    /// A state vector drifted off the unit sphere.
    Denormalized {
        /// Denormalized failure message
        message: String,
    },
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::InvalidGate { message } => write!(f, "Invalid Gate: {}", message),
            CircuitError::QubitOutOfRange { qubit, num_qubits } => {
                write!(f, "Qubit Out Of Range: qubit {} on a {}-qubit circuit", qubit, num_qubits)
            }
            CircuitError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension Mismatch: expected {} amplitudes, got {}", expected, actual)
            }
            CircuitError::InvalidCircuit { message } => write!(f, "Invalid Circuit: {}", message),
            CircuitError::Denormalized { message } => write!(f, "Denormalized State: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for CircuitError {}
