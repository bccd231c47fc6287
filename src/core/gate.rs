// src/core/gate.rs

//! The supported gate alphabet and the placement record tying a gate
//! to a circuit column.

use std::fmt;

use super::error::CircuitError;

/// The gate alphabet supported by the engine.
///
/// A `GateKind` is a bare selection tag — what a palette button in the
/// UI carries before any qubit has been chosen. The set is closed:
/// every gate the engine can ever apply is one of these six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Pauli-X (bit flip)
    X,
    /// Hadamard
    H,
    /// Pauli-Z (phase flip)
    Z,
    /// Controlled-X
    Cnot,
    /// Quarter-turn phase (√Z)
    S,
    /// Eighth-turn phase (√S)
    T,
}

impl GateKind {
    /// Builds the gate for kinds that take only a target qubit.
    ///
    /// Returns `None` for [`GateKind::Cnot`], which needs a control
    /// qubit selected first (see `circuits::GateSelector`).
    pub fn with_target(self, target: usize) -> Option<Gate> {
        match self {
            GateKind::X => Some(Gate::X { target }),
            GateKind::H => Some(Gate::H { target }),
            GateKind::Z => Some(Gate::Z { target }),
            GateKind::S => Some(Gate::S { target }),
            GateKind::T => Some(Gate::T { target }),
            GateKind::Cnot => None,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            GateKind::X => "X",
            GateKind::H => "H",
            GateKind::Z => "Z",
            GateKind::Cnot => "CNOT",
            GateKind::S => "S",
            GateKind::T => "T",
        };
        write!(f, "{}", symbol)
    }
}

/// A controlled-X with its qubit pair validated at construction.
///
/// The fields are private so a CNOT whose control equals its target is
/// unrepresentable — the degenerate configuration never reaches the
/// gate applicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CnotGate {
    control: usize,
    target: usize,
}

impl CnotGate {
    /// Builds a CNOT, rejecting `control == target`.
    pub fn new(control: usize, target: usize) -> Result<Self, CircuitError> {
        if control == target {
            return Err(CircuitError::InvalidGate {
                message: format!(
                    "CNOT control and target must differ (both were qubit {})",
                    control
                ),
            });
        }
        Ok(Self { control, target })
    }

    /// The qubit whose value gates the flip.
    pub fn control(&self) -> usize {
        self.control
    }

    /// The qubit that is conditionally flipped.
    pub fn target(&self) -> usize {
        self.target
    }
}

/// A fully specified gate, ready to apply.
///
/// This is a closed sum type: the gate applicator matches it
/// exhaustively and there is no catch-all branch to silently absorb a
/// malformed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Pauli-X on `target`.
    X {
        /// Qubit whose bit is flipped
        target: usize,
    },
    /// Hadamard on `target`.
    H {
        /// Qubit spread into superposition
        target: usize,
    },
    /// Pauli-Z on `target`.
    Z {
        /// Qubit whose |1⟩ component is negated
        target: usize,
    },
    /// Controlled-X over a validated qubit pair.
    Cnot(CnotGate),
    /// S (90° phase) on `target`.
    S {
        /// Qubit whose |1⟩ component is rotated by π/2
        target: usize,
    },
    /// T (45° phase) on `target`.
    T {
        /// Qubit whose |1⟩ component is rotated by π/4
        target: usize,
    },
}

impl Gate {
    /// Convenience constructor for a validated CNOT.
    pub fn cnot(control: usize, target: usize) -> Result<Self, CircuitError> {
        Ok(Gate::Cnot(CnotGate::new(control, target)?))
    }

    /// The qubit the gate acts on.
    pub fn target(&self) -> usize {
        match self {
            Gate::X { target }
            | Gate::H { target }
            | Gate::Z { target }
            | Gate::S { target }
            | Gate::T { target } => *target,
            Gate::Cnot(cnot) => cnot.target(),
        }
    }

    /// The control qubit, for controlled gates.
    pub fn control(&self) -> Option<usize> {
        match self {
            Gate::Cnot(cnot) => Some(cnot.control()),
            _ => None,
        }
    }

    /// Every qubit index the gate references.
    pub fn qubits(&self) -> Vec<usize> {
        match self {
            Gate::Cnot(cnot) => vec![cnot.control(), cnot.target()],
            other => vec![other.target()],
        }
    }

    /// The selection tag for this gate.
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::X { .. } => GateKind::X,
            Gate::H { .. } => GateKind::H,
            Gate::Z { .. } => GateKind::Z,
            Gate::Cnot(_) => GateKind::Cnot,
            Gate::S { .. } => GateKind::S,
            Gate::T { .. } => GateKind::T,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Cnot(cnot) => write!(f, "CNOT(q{}→q{})", cnot.control(), cnot.target()),
            other => write!(f, "{}(q{})", other.kind(), other.target()),
        }
    }
}

/// Unique identifier for a gate placed on a circuit.
///
/// Ids are handed out by the owning circuit from a monotonic counter,
/// so removal by id is unambiguous even when two identical gates sit
/// on the same qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacedGateId(pub u64);

impl fmt::Display for PlacedGateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gate#{}", self.0)
    }
}

/// A gate pinned to a circuit column.
///
/// Ordering key is `position` ascending; ties resolve by insertion
/// order, which the circuit's gate list preserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGate {
    /// Unique id within the owning circuit.
    pub id: PlacedGateId,
    /// Column order key.
    pub position: u32,
    /// The gate itself.
    pub gate: Gate,
}
