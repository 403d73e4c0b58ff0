use std::fmt::Write;

use derive_more::Display;
use gf2perm::{dot_parity, is_affine, Permutation};

use crate::gate::{qubit_bit, QubitId};

/// Axis of a Pauli generator. Only X and Z strings are needed to describe the candidate subgroups.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
pub enum Axis {
    #[display("x")]
    X,
    #[display("z")]
    Z,
}

/// Tensor product of Pauli X or of Pauli Z operators.
///
/// Bits of `support` select qubits the same way bits of a basis state do, so for six qubits
/// `support == 1` is qubit 6 and `support == 32` is qubit 1.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PauliGenerator {
    pub axis: Axis,
    pub support: usize,
}

impl PauliGenerator {
    pub const fn x(support: usize) -> Self {
        PauliGenerator { axis: Axis::X, support }
    }

    pub const fn z(support: usize) -> Self {
        PauliGenerator { axis: Axis::Z, support }
    }

    pub fn from_qubits(axis: Axis, qubits: &[QubitId], qubit_count: usize) -> Self {
        let support = qubits.iter().fold(0, |support, &qubit| support ^ qubit_bit(qubit, qubit_count));
        PauliGenerator { axis, support }
    }

    /// Qubits in the support, in increasing order.
    pub fn qubits(&self, qubit_count: usize) -> impl Iterator<Item = QubitId> + '_ {
        (1..=qubit_count).filter(move |&qubit| self.support & qubit_bit(qubit, qubit_count) != 0)
    }

    /// Short label such as `x3x4` or `z1`.
    #[must_use]
    pub fn label(&self, qubit_count: usize) -> String {
        self.qubits(qubit_count).fold(String::new(), |mut label, qubit| {
            let _ = write!(label, "{}{qubit}", self.axis);
            label
        })
    }

    #[must_use]
    pub fn commutes_with(&self, other: &PauliGenerator) -> bool {
        self.axis == other.axis || !dot_parity(self.support, other.support)
    }

    /// Binary symplectic vector: X part in the high `qubit_count` bits, Z part in the low bits.
    #[must_use]
    pub fn symplectic_bits(&self, qubit_count: usize) -> u64 {
        let support = self.support as u64;
        match self.axis {
            Axis::X => support << qubit_count,
            Axis::Z => support,
        }
    }

    /// Whether conjugation by `permutation` maps this operator onto a single Pauli operator
    /// up to sign.
    #[must_use]
    pub fn is_preserved_by<const SIZE: usize>(&self, permutation: &Permutation<SIZE>) -> bool {
        match self.axis {
            Axis::X => yields_x(permutation, self.support),
            Axis::Z => yields_z(permutation, self.support),
        }
    }
}

/// Whether `pi X(support) pi^-1` is again a Pauli X string.
///
/// The conjugate sends `j` to `pi(pi^-1(j) ^ support)`, which is a translation exactly when it
/// equals `j ^ c0` for `c0`, the image of zero.
#[must_use]
pub fn yields_x<const SIZE: usize>(permutation: &Permutation<SIZE>, support: usize) -> bool {
    x_image(permutation, support).is_some()
}

/// Support of `pi X(support) pi^-1` when it is a Pauli X string.
#[must_use]
pub fn x_image<const SIZE: usize>(permutation: &Permutation<SIZE>, support: usize) -> Option<usize> {
    let conjugate = permutation.conjugated_translation(support);
    let image = conjugate[0];
    conjugate
        .iter()
        .enumerate()
        .skip(1)
        .all(|(state, &target)| target == image ^ state)
        .then_some(image)
}

/// Whether `pi Z(support) pi^-1` is again a Pauli Z string up to sign.
///
/// The conjugate is diagonal with sign `(-1)^(support . pi^-1(j))` on state `j`; it is a Pauli Z
/// string exactly when these sign bits form an affine function of `j`.
#[must_use]
pub fn yields_z<const SIZE: usize>(permutation: &Permutation<SIZE>, support: usize) -> bool {
    is_affine(&conjugated_signs(permutation, support))
}

/// Support of `pi Z(support) pi^-1` when it is a Pauli Z string up to sign.
#[must_use]
pub fn z_image<const SIZE: usize>(permutation: &Permutation<SIZE>, support: usize) -> Option<usize> {
    let signs = conjugated_signs(permutation, support);
    if !is_affine(&signs) {
        return None;
    }
    let image = (0..Permutation::<SIZE>::QUBIT_COUNT)
        .filter(|bit| signs[1 << bit] != signs[0])
        .fold(0, |image, bit| image | (1 << bit));
    Some(image)
}

fn conjugated_signs<const SIZE: usize>(permutation: &Permutation<SIZE>, support: usize) -> [bool; SIZE] {
    debug_assert!(support < SIZE, "support {support} is outside of 0..{SIZE}");
    std::array::from_fn(|state| dot_parity(permutation.preimage(state), support))
}
