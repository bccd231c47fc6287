// src/lib.rs

//! `quizbit` - the state-vector simulation engine behind a
//! quantum-computing puzzle game
//!
//! This library applies gates from the closed set {X, H, Z, CNOT, S, T}
//! to a 2^n-amplitude register and validates the result against a
//! puzzle's target state. Everything else in the application — XP and
//! mastery tracking, quest state, rendering, audio — lives outside this
//! crate and consumes only three things: state-vector snapshots, the
//! boolean validation verdict, and an advisory performance warning on
//! the log.
//!
//! Gates act by bit arithmetic on basis indices rather than by
//! tensor-product matrices. That shortcut is exact for this single- and
//! two-qubit alphabet but does not extend to arbitrary multi-qubit
//! unitaries; the supported scale is small registers (puzzles use 1-3
//! qubits).

pub mod circuits;
pub mod core;
pub mod puzzles;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use circuits::{Circuit, GateSelector, Selection, SelectorState};
pub use core::{CircuitError, CnotGate, Gate, GateKind, PlacedGate, PlacedGateId, StateVector};
pub use puzzles::Puzzle;
pub use simulation::{Evolver, apply_gate};
pub use validation::{
    DEFAULT_MATCH_TOLERANCE,
    check_normalization,
    states_match,
};

// Example 1: Solving the bit-flip lesson
// Demonstrates binding an evolver to a puzzle, placing a gate, and
// checking the solution.
/// ```
/// use quizbit::{CircuitError, Evolver, Gate, Puzzle};
///
/// let puzzle = Puzzle::bit_flip();
/// let mut evolver = Evolver::for_puzzle(1, &puzzle)?;
///
/// // |0⟩ --X--> |1⟩, which is exactly the target.
/// evolver.add_gate(Gate::X { target: 0 })?;
/// assert!(evolver.check(&puzzle));
///
/// // Probabilities for the render layer: all weight on |1⟩.
/// let probs = evolver.state().probabilities();
/// assert!((probs[1] - 1.0).abs() < 1e-9);
/// # Ok::<(), CircuitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Building a Bell pair through the placement protocol
// Demonstrates the CNOT selection state machine driving the evolver,
// including the control-arming step.
/// ```
/// use quizbit::{CircuitError, Evolver, GateKind, GateSelector, Puzzle, Selection};
///
/// let puzzle = Puzzle::bell_pair();
/// let mut evolver = Evolver::for_puzzle(2, &puzzle)?;
/// let mut selector = GateSelector::new();
///
/// // H places in two clicks: kind, then qubit.
/// selector.select_kind(GateKind::H);
/// if let Selection::Completed(gate) = selector.select_qubit(0) {
///     evolver.add_gate(gate)?;
/// }
///
/// // CNOT takes three: kind, control qubit, target qubit.
/// selector.select_kind(GateKind::Cnot);
/// assert_eq!(selector.select_qubit(0), Selection::ControlArmed { control: 0 });
/// if let Selection::Completed(gate) = selector.select_qubit(1) {
///     evolver.add_gate(gate)?;
/// }
///
/// // (|00⟩ + |11⟩)/√2 matches the lesson target.
/// assert!(evolver.check(&puzzle));
/// # Ok::<(), CircuitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
