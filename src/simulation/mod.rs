// src/simulation/mod.rs

//! Evolves a circuit's state vector as gates are placed and removed.
//!
//! The `Evolver` is the single owner of the authoritative current
//! state; everything outside this crate reads snapshots. State is
//! always the fold of the gate applicator over the circuit's placed
//! gates from the initial vector: adding a gate extends the fold by
//! one step, removing one filters the log and refolds from scratch.

pub(crate) mod engine;
mod perf;

// Re-export the pure applicator; per-gate semantics live in `engine`.
pub use engine::apply_gate;

use crate::circuits::Circuit;
use crate::core::state::dimension_for;
use crate::core::{CircuitError, Gate, PlacedGateId, StateVector};
use crate::puzzles::Puzzle;
use crate::validation;

/// Drives a circuit's state vector through gate placement and removal.
///
/// Adding a gate applies just that gate to the current state, O(2^n).
/// Removing one resets to the initial state and replays every
/// surviving gate in position order, O(m·2^n) for m remaining gates —
/// correctness over cleverness, deliberately. Do not replace the
/// replay with an "apply the removed gate again" undo: not every gate
/// in the alphabet is self-inverse under these bit-mask semantics.
#[derive(Debug)]
pub struct Evolver {
    circuit: Circuit,
    initial: StateVector,
    state: StateVector,
}

impl Evolver {
    /// Creates an evolver over `num_qubits` qubits starting from |0…0⟩.
    pub fn new(num_qubits: usize) -> Result<Self, CircuitError> {
        let circuit = Circuit::new(num_qubits)?;
        let initial = StateVector::zero(num_qubits)?;
        let state = initial.clone();
        Ok(Self {
            circuit,
            initial,
            state,
        })
    }

    /// Creates an evolver bound to a puzzle: evolution starts from the
    /// puzzle's authored initial state instead of |0…0⟩.
    ///
    /// The puzzle's state dimension must equal 2^`num_qubits`.
    pub fn for_puzzle(num_qubits: usize, puzzle: &Puzzle) -> Result<Self, CircuitError> {
        let circuit = Circuit::new(num_qubits)?;
        let expected = dimension_for(num_qubits)?;
        let initial = puzzle.initial_state().clone();
        if initial.dim() != expected {
            return Err(CircuitError::DimensionMismatch {
                expected,
                actual: initial.dim(),
            });
        }
        let state = initial.clone();
        Ok(Self {
            circuit,
            initial,
            state,
        })
    }

    /// The circuit being evolved.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Snapshot of the authoritative current state.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Places `gate` at the next free column and applies it to the
    /// current state incrementally.
    pub fn add_gate(&mut self, gate: Gate) -> Result<PlacedGateId, CircuitError> {
        let id = self.circuit.push(gate)?;
        self.state = engine::apply_gate(&self.state, &gate);
        tracing::debug!(gate = %gate, id = %id, "gate placed");
        Ok(id)
    }

    /// Removes a placed gate by id, then refolds the remaining gates
    /// from the initial state. Returns `false` (leaving everything
    /// untouched) when the id is unknown.
    pub fn remove_gate(&mut self, id: PlacedGateId) -> bool {
        if !self.circuit.remove(id) {
            return false;
        }
        tracing::debug!(id = %id, remaining = self.circuit.len(), "gate removed, replaying");
        self.replay();
        true
    }

    /// Drops every placed gate and resets to the initial state.
    pub fn clear(&mut self) {
        self.circuit.clear_gates();
        self.state = self.initial.clone();
    }

    /// Whether the current state matches `puzzle`'s target within the
    /// puzzle's tolerance. The boolean is the whole contract; any
    /// pass/fail prose is the UI layer's business.
    pub fn check(&self, puzzle: &Puzzle) -> bool {
        validation::states_match(&self.state, puzzle.target_state(), puzzle.tolerance())
    }

    /// Full refold of the placed-gate log, timed by the performance
    /// monitor. Gates replay in ascending position order (the list
    /// order, by construction).
    fn replay(&mut self) {
        let initial = &self.initial;
        let gates = self.circuit.placed_gates();
        self.state = perf::time_replay(gates.len(), || {
            gates.iter().fold(initial.clone(), |state, placed| {
                engine::apply_gate(&state, &placed.gate)
            })
        });
    }
}
