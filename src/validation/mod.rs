// src/validation/mod.rs

//! State-vector comparison and sanity checks.

use crate::core::{CircuitError, StateVector};

/// Default per-amplitude distance tolerance for puzzle validation.
pub const DEFAULT_MATCH_TOLERANCE: f64 = 0.001;

/// Allowed drift of Σ|c_k|² from 1 under supported-gate evolution.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-6;

/// Whether `actual` matches `target` amplitude-by-amplitude.
///
/// Vectors of different lengths never match. Otherwise every index
/// must satisfy √(Δre² + Δim²) strictly below `tolerance`; a single
/// amplitude at or over the line fails the whole comparison. There is
/// no partial credit.
pub fn states_match(actual: &StateVector, target: &StateVector, tolerance: f64) -> bool {
    if actual.dim() != target.dim() {
        return false;
    }
    actual
        .amplitudes()
        .iter()
        .zip(target.amplitudes())
        .all(|(a, t)| {
            // Compare squared distance against tolerance² to skip the sqrt.
            (a - t).norm_sqr() < tolerance * tolerance
        })
}

/// Checks that the state vector is normalized (Σ|c_k|² ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to
///   [`DEFAULT_NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(CircuitError::Denormalized)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), CircuitError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(CircuitError::Denormalized {
            message: format!(
                "Sum(|c_k|^2) = {} (deviation > {})",
                norm_sqr, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
