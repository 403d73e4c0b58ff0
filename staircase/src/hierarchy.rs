use gf2perm::{is_clifford_permutation, Permutation};

/// Whether a basis permutation lies in the third level of the Clifford hierarchy.
///
/// A permutation `pi` is in the third level when `pi X pi^-1` is a Clifford operator for every
/// single qubit Pauli X. Those conjugates are themselves permutations, and a permutation is
/// Clifford exactly when it is affine over GF(2).
#[must_use]
pub fn is_third_level<const SIZE: usize>(permutation: &Permutation<SIZE>) -> bool {
    (0..Permutation::<SIZE>::QUBIT_COUNT)
        .all(|bit| is_clifford_permutation(&permutation.conjugated_translation(1 << bit)))
}
