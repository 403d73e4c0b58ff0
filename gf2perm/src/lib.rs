pub mod affine;
pub mod parity;
pub mod permutation;

pub use affine::{is_affine, is_affine_by_triples};
pub use parity::{dot_parity, parity};
pub use permutation::{is_clifford_permutation, Permutation, PermutationError};

/// Permutations of the 6-qubit computational basis.
pub type SixQubitPermutation = Permutation<64>;
