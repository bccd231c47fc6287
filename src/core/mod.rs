// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod gate;
pub mod state;

// Re-export public types for convenient access via `quizbit::core::TypeName`
pub use error::CircuitError;
pub use gate::{CnotGate, Gate, GateKind, PlacedGate, PlacedGateId};
pub use state::StateVector;
