// src/simulation/perf.rs

//! Advisory timing for full circuit replays.
//!
//! Observability only: a blown budget is reported on the log and the
//! replay's result is returned regardless. Nothing here can fail or
//! alter simulation output.

use std::time::{Duration, Instant};

/// Replays at or above this gate count are held to the time budget;
/// shorter circuits are never worth warning about.
pub(crate) const GATE_COUNT_FLOOR: usize = 10;

/// Wall-clock budget for a full replay at the supported scale.
pub(crate) const REPLAY_BUDGET: Duration = Duration::from_millis(100);

/// Runs `replay`, measuring wall-clock duration, and warns when a
/// circuit of `gate_count` gates blows the budget.
pub(crate) fn time_replay<T>(gate_count: usize, replay: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let value = replay();
    let elapsed = started.elapsed();

    if gate_count >= GATE_COUNT_FLOOR && elapsed > REPLAY_BUDGET {
        tracing::warn!(
            gate_count,
            elapsed_ms = elapsed.as_millis() as u64,
            budget_ms = REPLAY_BUDGET.as_millis() as u64,
            "circuit replay exceeded its time budget"
        );
    } else {
        tracing::debug!(
            gate_count,
            elapsed_us = elapsed.as_micros() as u64,
            "circuit replay completed"
        );
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_value_is_returned_unchanged() {
        let value = time_replay(0, || 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn slow_replay_still_returns_its_result() {
        // The warning path must stay advisory.
        let value = time_replay(GATE_COUNT_FLOOR, || {
            std::thread::sleep(REPLAY_BUDGET + Duration::from_millis(10));
            "done"
        });
        assert_eq!(value, "done");
    }
}
