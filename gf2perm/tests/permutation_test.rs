use gf2perm::{Permutation, PermutationError, SixQubitPermutation};
use itertools::iproduct;
use proptest::prelude::*;

fn shuffled(seed: Vec<usize>) -> [usize; 64] {
    let mut images: [usize; 64] = std::array::from_fn(|index| index);
    for (position, swap_with) in seed.into_iter().enumerate() {
        images.swap(position % 64, swap_with % 64);
    }
    images
}

#[test]
fn identity_is_clifford_and_self_inverse() {
    let identity = SixQubitPermutation::identity();
    assert!(identity.is_identity());
    assert!(identity.is_clifford());
    assert_eq!(identity.inverse(), identity);
    assert_eq!(identity.qubit_count(), 6);
    assert_eq!(SixQubitPermutation::QUBIT_COUNT, 6);
    assert_eq!(Permutation::<8>::QUBIT_COUNT, 3);
}

#[test]
fn rejects_tables_that_are_not_bijections() {
    let mut images: [usize; 8] = std::array::from_fn(|index| index);
    images[3] = 5;
    assert_eq!(
        Permutation::try_from(images),
        Err(PermutationError::Repeated { image: 5 })
    );
    images[3] = 8;
    assert_eq!(
        Permutation::try_from(images),
        Err(PermutationError::OutOfRange {
            position: 3,
            image: 8,
            size: 8
        })
    );
}

#[test]
fn affine_permutation_is_clifford() {
    // CNOT from bit 0 onto bit 1, followed by X on bit 2
    let images: [usize; 8] = std::array::from_fn(|index| (index ^ ((index & 1) << 1)) ^ 0b100);
    let permutation = Permutation::try_from(images).unwrap();
    assert!(permutation.is_clifford());
}

#[test]
fn toffoli_is_not_clifford() {
    let images: [usize; 8] = std::array::from_fn(|index| if index & 0b011 == 0b011 { index ^ 0b100 } else { index });
    let permutation = Permutation::try_from(images).unwrap();
    assert!(!permutation.is_clifford());
    // Toffoli conjugates every X into a Clifford
    for shift in [1, 2, 4] {
        assert!(gf2perm::is_clifford_permutation(&permutation.conjugated_translation(shift)));
    }
}

#[test]
fn affine_permutations_conjugate_translations_to_translations() {
    // CNOT from bit 0 onto bit 1, CNOT from bit 2 onto bit 0, then X on bit 1
    let images: [usize; 8] = std::array::from_fn(|index| {
        let index = index ^ ((index & 1) << 1);
        (index ^ ((index >> 2) & 1)) ^ 0b010
    });
    let permutation = Permutation::try_from(images).unwrap();
    assert!(permutation.is_clifford());
    for (shift, state) in iproduct!(0..8, 0..8) {
        let linear_image = permutation.image(shift) ^ permutation.image(0);
        assert_eq!(permutation.conjugated_translation(shift)[state], state ^ linear_image);
    }
}

proptest! {
    #[test]
    fn inverse_round_trips(seed in prop::collection::vec(0..64usize, 0..128)) {
        let permutation = Permutation::try_from(shuffled(seed)).unwrap();
        for index in 0..64 {
            assert_eq!(permutation.image(permutation.preimage(index)), index);
            assert_eq!(permutation.preimage(permutation.image(index)), index);
        }
        assert_eq!(permutation.inverse().inverse(), permutation);
    }

    #[test]
    fn conjugated_translation_is_an_involution(seed in prop::collection::vec(0..64usize, 0..128), shift in 0..64usize) {
        let permutation = Permutation::try_from(shuffled(seed)).unwrap();
        let conjugate = permutation.conjugated_translation(shift);
        for index in 0..64 {
            assert_eq!(conjugate[conjugate[index]], index);
        }
    }

    #[test]
    fn identity_conjugates_translations_to_themselves(shift in 0..64usize) {
        let conjugate = SixQubitPermutation::identity().conjugated_translation(shift);
        for (index, image) in conjugate.into_iter().enumerate() {
            assert_eq!(image, index ^ shift);
        }
    }
}
