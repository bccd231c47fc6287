// src/simulation/engine.rs

//! The gate applicator: one gate's linear action on a full state
//! vector.

use crate::core::{Gate, StateVector};
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;

/// Applies one gate to `state`, returning the evolved vector.
///
/// Walks every basis index `i`, computes where the amplitude at `i`
/// is redistributed, and *adds* the contributions into a freshly
/// zeroed output vector. For this gate set each source index feeds at
/// most two destinations and no two sources ever collide on one, but
/// the additive form is kept so the loop stays correct for any linear
/// redistribution.
///
/// Gates act by bit arithmetic on the basis index (qubit `q` is bit
/// `q`): exact for the supported single- and two-qubit alphabet, not a
/// general tensor-product engine.
pub fn apply_gate(state: &StateVector, gate: &Gate) -> StateVector {
    let dim = state.dim();
    let mut out = vec![Complex::zero(); dim];

    for (i, &amp) in state.amplitudes().iter().enumerate() {
        match gate {
            Gate::X { target } => {
                out[i ^ (1 << target)] += amp;
            }
            Gate::H { target } => {
                // |0⟩ ↦ (|0⟩+|1⟩)/√2, |1⟩ ↦ (|0⟩−|1⟩)/√2: the sign
                // lands on the source's own index when its bit is set.
                let spread = amp * FRAC_1_SQRT_2;
                out[i] += if (i >> target) & 1 == 0 { spread } else { -spread };
                out[i ^ (1 << target)] += spread;
            }
            Gate::Z { target } => {
                out[i] += if (i >> target) & 1 == 1 { -amp } else { amp };
            }
            Gate::Cnot(cnot) => {
                if (i >> cnot.control()) & 1 == 1 {
                    out[i ^ (1 << cnot.target())] += amp;
                } else {
                    out[i] += amp;
                }
            }
            Gate::S { target } => {
                // 90° rotation: (re, im) ↦ (−im, re), i.e. multiply by i.
                out[i] += if (i >> target) & 1 == 1 {
                    Complex::<f64>::i() * amp
                } else {
                    amp
                };
            }
            Gate::T { target } => {
                // 45° rotation: multiply by e^(iπ/4) = (1+i)/√2.
                let exp_i_pi_4 = Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
                out[i] += if (i >> target) & 1 == 1 {
                    exp_i_pi_4 * amp
                } else {
                    amp
                };
            }
        }
    }

    StateVector::from_raw(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CircuitError;

    const TEST_TOLERANCE: f64 = 1e-12;

    fn amp(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    fn state(amps: Vec<Complex<f64>>) -> StateVector {
        StateVector::from_amplitudes(amps).expect("test amplitudes")
    }

    fn assert_amps_close(actual: &StateVector, expected: &[Complex<f64>], context: &str) {
        assert_eq!(actual.dim(), expected.len(), "dimension - {}", context);
        for (i, (a, e)) in actual.amplitudes().iter().zip(expected).enumerate() {
            let dist_sq = (a - e).norm_sqr();
            assert!(
                dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
                "index {}: actual {}, expected {} - {}",
                i,
                a,
                e,
                context
            );
        }
    }

    #[test]
    fn x_moves_amplitude_to_flipped_index() {
        let out = apply_gate(&state(vec![amp(1.0, 0.0), amp(0.0, 0.0)]), &Gate::X { target: 0 });
        assert_amps_close(&out, &[amp(0.0, 0.0), amp(1.0, 0.0)], "X on |0⟩");
    }

    #[test]
    fn h_spreads_and_is_self_inverse_on_one() {
        let one = state(vec![amp(0.0, 0.0), amp(1.0, 0.0)]);
        let spread = apply_gate(&one, &Gate::H { target: 0 });
        assert_amps_close(
            &spread,
            &[amp(FRAC_1_SQRT_2, 0.0), amp(-FRAC_1_SQRT_2, 0.0)],
            "H on |1⟩",
        );
        let back = apply_gate(&spread, &Gate::H { target: 0 });
        assert_amps_close(&back, one.amplitudes(), "H twice on |1⟩");
    }

    #[test]
    fn z_negates_only_the_set_bit() {
        let out = apply_gate(
            &state(vec![amp(0.5, 0.25), amp(0.5, -0.25)]),
            &Gate::Z { target: 0 },
        );
        assert_amps_close(&out, &[amp(0.5, 0.25), amp(-0.5, 0.25)], "Z phase flip");
    }

    #[test]
    fn s_rotates_set_bit_by_quarter_turn() {
        let out = apply_gate(
            &state(vec![amp(0.0, 0.0), amp(0.6, 0.8)]),
            &Gate::S { target: 0 },
        );
        // (re, im) ↦ (−im, re)
        assert_amps_close(&out, &[amp(0.0, 0.0), amp(-0.8, 0.6)], "S rotation");
    }

    #[test]
    fn t_rotates_set_bit_by_eighth_turn() {
        let out = apply_gate(
            &state(vec![amp(0.0, 0.0), amp(1.0, 0.0)]),
            &Gate::T { target: 0 },
        );
        assert_amps_close(
            &out,
            &[amp(0.0, 0.0), amp(FRAC_1_SQRT_2, FRAC_1_SQRT_2)],
            "T rotation",
        );
    }

    #[test]
    fn cnot_flips_target_only_when_control_set() -> Result<(), CircuitError> {
        let gate = Gate::cnot(0, 1)?;

        // Control bit set (index 1, qubit 0 = 1): amplitude moves to index 3.
        let armed = state(vec![amp(0.0, 0.0), amp(1.0, 0.0), amp(0.0, 0.0), amp(0.0, 0.0)]);
        let out = apply_gate(&armed, &gate);
        assert_amps_close(
            &out,
            &[amp(0.0, 0.0), amp(0.0, 0.0), amp(0.0, 0.0), amp(1.0, 0.0)],
            "CNOT with control set",
        );

        // Control bit clear (index 2, qubit 0 = 0): no-op.
        let idle = state(vec![amp(0.0, 0.0), amp(0.0, 0.0), amp(1.0, 0.0), amp(0.0, 0.0)]);
        let out = apply_gate(&idle, &gate);
        assert_amps_close(&out, idle.amplitudes(), "CNOT with control clear");
        Ok(())
    }

    #[test]
    fn gates_act_on_the_addressed_qubit_of_a_wider_register() {
        // X on qubit 1 of a 3-qubit register: index 5 (101) ↦ index 7 (111).
        let mut amps = vec![amp(0.0, 0.0); 8];
        amps[5] = amp(1.0, 0.0);
        let out = apply_gate(&state(amps), &Gate::X { target: 1 });
        let mut expected = vec![amp(0.0, 0.0); 8];
        expected[7] = amp(1.0, 0.0);
        assert_amps_close(&out, &expected, "X on middle qubit");
    }

    #[test]
    fn every_gate_preserves_the_norm() -> Result<(), CircuitError> {
        let gates = [
            Gate::X { target: 0 },
            Gate::H { target: 1 },
            Gate::Z { target: 0 },
            Gate::cnot(1, 0)?,
            Gate::S { target: 1 },
            Gate::T { target: 0 },
        ];
        // An arbitrary normalized 2-qubit state with complex phases.
        let mut current = state(vec![
            amp(0.5, 0.0),
            amp(0.0, 0.5),
            amp(-0.5, 0.0),
            amp(0.0, -0.5),
        ]);
        for gate in &gates {
            current = apply_gate(&current, gate);
            assert!(
                (current.norm_sqr() - 1.0).abs() < 1e-6,
                "norm drifted after {}",
                gate
            );
        }
        Ok(())
    }
}
