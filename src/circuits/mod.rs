// src/circuits/mod.rs

//! Defines the circuit structure — the ordered log of placed gates —
//! and the interactive selection protocol that produces new gates for
//! placement.
//!
//! A `Circuit` never evolves state on its own; it is the append-only
//! event log that `simulation::Evolver` folds the gate applicator
//! over. Removal is therefore "filter the log, refold", which is what
//! makes the recompute cost easy to reason about.

use crate::core::{CircuitError, Gate, GateKind, PlacedGate, PlacedGateId};
use std::fmt;

/// An n-qubit circuit: a fixed qubit count plus the ordered list of
/// placed gates.
///
/// The qubit count is fixed at creation and never changes mid-life.
/// The gate list is kept in ascending `position` order by
/// construction: new gates are always appended with a strictly larger
/// position than any existing one, and removal preserves the order of
/// the survivors, so insertion order breaks position ties stably.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    placed: Vec<PlacedGate>,
    next_id: u64,
}

impl Circuit {
    /// Creates a new, empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Result<Self, CircuitError> {
        if num_qubits == 0 {
            return Err(CircuitError::InvalidCircuit {
                message: "a circuit needs at least one qubit".to_string(),
            });
        }
        Ok(Self {
            num_qubits,
            placed: Vec::new(),
            next_id: 0,
        })
    }

    /// Number of qubits; fixed for the circuit's lifetime.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The placed gates in ascending position order.
    pub fn placed_gates(&self) -> &[PlacedGate] {
        &self.placed
    }

    /// Returns the total number of gates placed on the circuit.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Appends `gate` at the next free column (max position + 1, or 0
    /// when empty), validating that every referenced qubit is in range.
    pub(crate) fn push(&mut self, gate: Gate) -> Result<PlacedGateId, CircuitError> {
        for qubit in gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(CircuitError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        let position = self
            .placed
            .iter()
            .map(|placed| placed.position + 1)
            .max()
            .unwrap_or(0);
        let id = PlacedGateId(self.next_id);
        self.next_id += 1;
        self.placed.push(PlacedGate { id, position, gate });
        Ok(id)
    }

    /// Removes the gate with `id`; returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: PlacedGateId) -> bool {
        let before = self.placed.len();
        self.placed.retain(|placed| placed.id != id);
        self.placed.len() != before
    }

    /// Drops every placed gate. Ids are not reused afterwards.
    pub(crate) fn clear_gates(&mut self) {
        self.placed.clear();
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "quizbit::Circuit[{} gates on {} qubits]",
            self.placed.len(),
            self.num_qubits
        )?;
        for placed in &self.placed {
            writeln!(f, "  {:>3}: {} ({})", placed.position, placed.gate, placed.id)?;
        }
        Ok(())
    }
}

//-------------------------------------------------------------------------
// Gate selection protocol
//-------------------------------------------------------------------------

/// Interaction state of the gate-placement protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// Nothing selected.
    #[default]
    Idle,
    /// A gate kind is selected, waiting for a qubit click.
    GateTypeSelected(GateKind),
    /// CNOT with its control armed, waiting for the target qubit.
    ControlQubitPending {
        /// The armed control qubit
        control: usize,
    },
}

/// What a qubit click did to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No gate kind was selected; the click had no effect.
    Ignored,
    /// CNOT control armed; the next distinct qubit completes the gate.
    ControlArmed {
        /// The qubit recorded as pending control
        control: usize,
    },
    /// The armed control was clicked again and dropped; the selector
    /// is back to waiting for a control qubit.
    ControlCancelled,
    /// A gate is complete and ready to hand to the evolver.
    Completed(Gate),
}

/// Drives gate placement from UI clicks.
///
/// Non-controlled kinds place in two steps (kind, then qubit). CNOT
/// takes three: kind, control qubit, then a distinct target qubit —
/// control is the first click, target the second. Clicking the armed
/// control again disarms it without placing anything:
///
/// `Idle → GateTypeSelected → ControlQubitPending → Idle`
///
/// The selector only *builds* gates; the caller feeds a
/// [`Selection::Completed`] gate to `Evolver::add_gate`, keeping this
/// type free of any state-vector concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateSelector {
    state: SelectorState,
}

impl GateSelector {
    /// Creates a selector in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current protocol state, for UI highlighting.
    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// A palette click: (re)selects the gate kind. Any armed control
    /// is dropped.
    pub fn select_kind(&mut self, kind: GateKind) {
        self.state = SelectorState::GateTypeSelected(kind);
    }

    /// Clears the selection entirely.
    pub fn reset(&mut self) {
        self.state = SelectorState::Idle;
    }

    /// A qubit-lane click; advances the placement state machine.
    pub fn select_qubit(&mut self, qubit: usize) -> Selection {
        match self.state {
            SelectorState::Idle => Selection::Ignored,
            SelectorState::GateTypeSelected(kind) => match kind.with_target(qubit) {
                Some(gate) => {
                    self.state = SelectorState::Idle;
                    Selection::Completed(gate)
                }
                None => {
                    self.state = SelectorState::ControlQubitPending { control: qubit };
                    Selection::ControlArmed { control: qubit }
                }
            },
            SelectorState::ControlQubitPending { control } => {
                if qubit == control {
                    self.state = SelectorState::GateTypeSelected(GateKind::Cnot);
                    Selection::ControlCancelled
                } else {
                    self.state = SelectorState::Idle;
                    match Gate::cnot(control, qubit) {
                        Ok(gate) => Selection::Completed(gate),
                        // qubit != control was just checked; treat a
                        // constructor refusal as a dropped click.
                        Err(_) => Selection::Ignored,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_positions_and_ids() -> Result<(), CircuitError> {
        let mut circuit = Circuit::new(2)?;
        let a = circuit.push(Gate::H { target: 0 })?;
        let b = circuit.push(Gate::X { target: 1 })?;
        assert_ne!(a, b);
        let placed = circuit.placed_gates();
        assert_eq!(placed[0].position, 0);
        assert_eq!(placed[1].position, 1);
        Ok(())
    }

    #[test]
    fn push_rejects_out_of_range_qubits() {
        let mut circuit = Circuit::new(2).unwrap();
        let err = circuit.push(Gate::Z { target: 2 }).unwrap_err();
        assert_eq!(
            err,
            CircuitError::QubitOutOfRange {
                qubit: 2,
                num_qubits: 2
            }
        );
        assert!(circuit.is_empty());
    }

    #[test]
    fn remove_by_id_keeps_survivor_order() -> Result<(), CircuitError> {
        let mut circuit = Circuit::new(3)?;
        let first = circuit.push(Gate::H { target: 0 })?;
        let second = circuit.push(Gate::X { target: 1 })?;
        let third = circuit.push(Gate::Z { target: 2 })?;

        assert!(circuit.remove(second));
        assert!(!circuit.remove(second), "already gone");
        let ids: Vec<PlacedGateId> = circuit.placed_gates().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first, third]);
        Ok(())
    }

    #[test]
    fn next_position_follows_the_surviving_maximum() -> Result<(), CircuitError> {
        // Position is always (current max + 1), so a removed trailing
        // column can be reassigned; ids stay unique regardless.
        let mut circuit = Circuit::new(1)?;
        circuit.push(Gate::X { target: 0 })?;
        let second = circuit.push(Gate::H { target: 0 })?;
        circuit.remove(second);
        circuit.push(Gate::Z { target: 0 })?;
        assert_eq!(circuit.placed_gates()[1].position, 1);
        assert_ne!(circuit.placed_gates()[1].id, second);
        Ok(())
    }

    #[test]
    fn zero_qubit_circuit_rejected() {
        assert!(matches!(
            Circuit::new(0),
            Err(CircuitError::InvalidCircuit { .. })
        ));
    }

    #[test]
    fn selector_places_single_qubit_gate_in_two_clicks() {
        let mut selector = GateSelector::new();
        assert_eq!(selector.select_qubit(0), Selection::Ignored);

        selector.select_kind(GateKind::H);
        assert_eq!(
            selector.select_qubit(1),
            Selection::Completed(Gate::H { target: 1 })
        );
        assert_eq!(selector.state(), SelectorState::Idle);
    }

    #[test]
    fn selector_cnot_arm_complete() {
        let mut selector = GateSelector::new();
        selector.select_kind(GateKind::Cnot);
        assert_eq!(
            selector.select_qubit(0),
            Selection::ControlArmed { control: 0 }
        );
        assert_eq!(
            selector.select_qubit(1),
            Selection::Completed(Gate::cnot(0, 1).unwrap())
        );
        assert_eq!(selector.state(), SelectorState::Idle);
    }

    #[test]
    fn selector_cnot_same_qubit_cancels_control() {
        let mut selector = GateSelector::new();
        selector.select_kind(GateKind::Cnot);
        selector.select_qubit(2);
        assert_eq!(selector.select_qubit(2), Selection::ControlCancelled);
        // Back to kind-selected, not idle: the next click arms a new control.
        assert_eq!(
            selector.state(),
            SelectorState::GateTypeSelected(GateKind::Cnot)
        );
        assert_eq!(
            selector.select_qubit(0),
            Selection::ControlArmed { control: 0 }
        );
    }

    #[test]
    fn selecting_a_kind_drops_an_armed_control() {
        let mut selector = GateSelector::new();
        selector.select_kind(GateKind::Cnot);
        selector.select_qubit(0);
        selector.select_kind(GateKind::X);
        assert_eq!(
            selector.select_qubit(0),
            Selection::Completed(Gate::X { target: 0 })
        );
    }
}
