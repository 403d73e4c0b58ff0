use gf2perm::{Permutation, SixQubitPermutation};
use proptest::prelude::*;
use rayon::prelude::*;
use staircase::{is_third_level, Ladder, LadderError, ToffoliGate, SIX_QUBIT_STAIRCASE};

#[test]
fn generated_staircase_matches_six_qubit_table() {
    let ladder = Ladder::staircase(6);
    assert_eq!(ladder.gates(), &SIX_QUBIT_STAIRCASE[..]);
    assert_eq!(ladder, Ladder::six_qubit());
    assert_eq!(ladder.mask_count(), 1 << 20);
}

#[test]
fn small_staircases() {
    assert_eq!(Ladder::staircase(2).gate_count(), 0);
    assert_eq!(Ladder::staircase(3).gates(), &[ToffoliGate::new(1, 2, 3)]);
    assert_eq!(
        Ladder::staircase(4).gates(),
        &[
            ToffoliGate::new(1, 2, 3),
            ToffoliGate::new(1, 2, 4),
            ToffoliGate::new(1, 3, 4),
            ToffoliGate::new(2, 3, 4),
        ]
    );
}

#[test]
fn empty_mask_builds_identity() {
    let permutation: SixQubitPermutation = Ladder::six_qubit().build(0);
    assert!(permutation.is_identity());
    assert!(permutation.is_clifford());
    assert!(is_third_level(&permutation));
}

#[test]
fn toffoli_flips_target_when_both_controls_are_set() {
    let gate = ToffoliGate::new(1, 2, 3);
    assert_eq!(gate.apply(0b11_0000, 6), 0b11_1000);
    assert_eq!(gate.apply(0b11_1000, 6), 0b11_0000);
    assert_eq!(gate.apply(0b10_0111, 6), 0b10_0111);
    assert_eq!(gate.to_string(), "CCX(1, 2 -> 3)");
}

#[test]
fn single_toffoli_is_third_level_but_not_clifford() {
    let permutation: SixQubitPermutation = Ladder::six_qubit().build(1);
    assert!(!permutation.is_clifford());
    assert!(is_third_level(&permutation));
}

#[test]
fn gates_apply_in_ladder_order() {
    // CCX(1, 2 -> 3) sets qubit 3, which then triggers CCX(1, 3 -> 4)
    let permutation: SixQubitPermutation = Ladder::six_qubit().build(0b101);
    assert_eq!(permutation.image(0b11_0000), 0b11_1100);
    // the other order leaves qubit 4 alone
    let reversed = Ladder::new(6, vec![ToffoliGate::new(1, 3, 4), ToffoliGate::new(1, 2, 3)]).unwrap();
    let permutation: SixQubitPermutation = reversed.build(0b11);
    assert_eq!(permutation.image(0b11_0000), 0b11_1000);
}

#[test]
fn single_gates_never_mismatch() {
    let ladder = Ladder::six_qubit();
    for index in 0..ladder.gate_count() {
        assert!(!ladder.has_mismatch(1 << index));
    }
    let usage = ladder.usage(1);
    assert_eq!(usage.controls, (1 << 1) | (1 << 2));
    assert_eq!(usage.targets, 1 << 3);
}

#[test]
fn target_reused_as_control_is_a_mismatch() {
    let ladder = Ladder::six_qubit();
    // CCX(1, 2 -> 3) together with CCX(1, 3 -> 4)
    let usage = ladder.usage(0b101);
    assert!(usage.has_mismatch());
    assert_eq!(usage.colliding_qubits().collect::<Vec<_>>(), vec![3]);
    // CCX(1, 2 -> 3) together with CCX(1, 2 -> 4) shares controls only
    assert!(!ladder.has_mismatch(0b11));
    assert!(!ladder.has_mismatch(0));
}

#[test]
fn rejects_malformed_ladders() {
    assert_eq!(
        Ladder::new(3, vec![ToffoliGate::new(1, 2, 4)]),
        Err(LadderError::QubitOutOfRange {
            index: 0,
            gate: ToffoliGate::new(1, 2, 4),
            qubit_count: 3
        })
    );
    assert_eq!(
        Ladder::new(4, vec![ToffoliGate::new(1, 2, 3), ToffoliGate::new(0, 2, 3)]),
        Err(LadderError::QubitOutOfRange {
            index: 1,
            gate: ToffoliGate::new(0, 2, 3),
            qubit_count: 4
        })
    );
    assert_eq!(
        Ladder::new(4, vec![ToffoliGate::new(2, 2, 3)]),
        Err(LadderError::RepeatedQubit {
            index: 0,
            gate: ToffoliGate::new(2, 2, 3)
        })
    );
    assert_eq!(
        Ladder::new(6, vec![ToffoliGate::new(1, 2, 3); 32]),
        Err(LadderError::TooManyGates { gate_count: 32 })
    );
    assert_eq!(
        Ladder::new(17, Vec::new()),
        Err(LadderError::TooManyQubits { qubit_count: 17 })
    );
}

#[test]
fn every_mask_builds_a_bijection() {
    let ladder = Ladder::six_qubit();
    (0..ladder.mask_count()).into_par_iter().for_each(|mask| {
        let permutation: SixQubitPermutation = ladder.build(mask);
        assert!(Permutation::try_from(*permutation.images()).is_ok(), "mask {mask:020b}");
        for state in 0..64 {
            assert_eq!(permutation.image(permutation.preimage(state)), state);
        }
    });
}

#[test]
#[should_panic(expected = "do not match a ladder on 6 qubits")]
fn build_rejects_a_mismatched_state_count() {
    let _: Permutation<32> = Ladder::six_qubit().build(0);
}

proptest! {
    #[test]
    fn mismatch_is_control_target_intersection(mask in 0..1u32 << 20) {
        let ladder = Ladder::six_qubit();
        let gates: Vec<&ToffoliGate> = ladder.selected(mask).collect();
        let expected = (1..=6).any(|qubit| {
            gates.iter().any(|gate| gate.target == qubit)
                && gates.iter().any(|gate| gate.controls.0 == qubit || gate.controls.1 == qubit)
        });
        assert_eq!(ladder.has_mismatch(mask), expected);
    }

    #[test]
    fn staircase_permutations_fix_the_first_two_qubits(mask in 0..1u32 << 20) {
        let permutation: SixQubitPermutation = Ladder::six_qubit().build(mask);
        for state in 0..64 {
            assert_eq!(permutation.image(state) >> 4, state >> 4);
        }
    }
}
