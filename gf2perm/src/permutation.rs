use derive_more::{Display, Error};

use crate::affine::is_affine;

/// A bijection of `0..SIZE`, the computational basis of `log2(SIZE)` qubits,
/// stored together with its inverse.
///
/// Both tables live inline, so building and dropping a permutation never allocates.
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Permutation<const SIZE: usize> {
    images: [usize; SIZE],
    preimages: [usize; SIZE],
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum PermutationError {
    #[display("image {image} at position {position} is outside of 0..{size}")]
    OutOfRange { position: usize, image: usize, size: usize },
    #[display("image {image} appears more than once")]
    Repeated { image: usize },
}

impl<const SIZE: usize> Permutation<SIZE> {
    const VALID_SIZE: () = assert!(
        SIZE.is_power_of_two() && SIZE <= 1 << 16,
        "permutation size must be a power of two no larger than 2^16"
    );

    /// Number of qubits whose basis states are permuted.
    pub const QUBIT_COUNT: usize = SIZE.trailing_zeros() as usize;

    pub fn identity() -> Self {
        let () = Self::VALID_SIZE;
        let identity = std::array::from_fn(|index| index);
        Permutation {
            images: identity,
            preimages: identity,
        }
    }

    /// Builds the permutation `index -> images[index]` and its inverse.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `images` is a bijection of `0..SIZE`; use [`Permutation::try_from`]
    /// for tables of unknown origin.
    pub fn from_images(images: [usize; SIZE]) -> Self {
        let () = Self::VALID_SIZE;
        debug_assert_eq!(validate_bijection(&images), Ok(()));
        let mut preimages = [0; SIZE];
        for (preimage, &image) in images.iter().enumerate() {
            preimages[image] = preimage;
        }
        Permutation { images, preimages }
    }

    #[inline]
    pub fn images(&self) -> &[usize; SIZE] {
        &self.images
    }

    #[inline]
    pub fn preimages(&self) -> &[usize; SIZE] {
        &self.preimages
    }

    #[inline]
    #[must_use]
    pub fn image(&self, index: usize) -> usize {
        self.images[index]
    }

    #[inline]
    #[must_use]
    pub fn preimage(&self, index: usize) -> usize {
        self.preimages[index]
    }

    #[inline]
    #[must_use]
    pub fn qubit_count(&self) -> usize {
        Self::QUBIT_COUNT
    }

    pub fn inverse(&self) -> Self {
        Permutation {
            images: self.preimages,
            preimages: self.images,
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(index, &image)| index == image)
    }

    /// Whether the permutation is an affine map of GF(2)^n, i.e. a Clifford permutation.
    #[must_use]
    pub fn is_clifford(&self) -> bool {
        is_clifford_permutation(&self.images)
    }

    /// Table of `j -> pi(pi^-1(j) ^ shift)`, the conjugate of the translation by `shift`.
    ///
    /// This is the basis permutation performed by `pi X(shift) pi^-1`, where `X(shift)` is the
    /// Pauli X operator supported on the bits of `shift`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `shift < SIZE`.
    #[must_use]
    pub fn conjugated_translation(&self, shift: usize) -> [usize; SIZE] {
        debug_assert!(shift < SIZE, "shift {shift} is outside of 0..{SIZE}");
        std::array::from_fn(|index| self.images[self.preimages[index] ^ shift])
    }
}

impl<const SIZE: usize> TryFrom<[usize; SIZE]> for Permutation<SIZE> {
    type Error = PermutationError;

    fn try_from(images: [usize; SIZE]) -> Result<Self, Self::Error> {
        validate_bijection(&images)?;
        Ok(Self::from_images(images))
    }
}

/// Whether a permutation table is affine once normalized by its image of zero.
#[inline]
#[must_use]
pub fn is_clifford_permutation(images: &[usize]) -> bool {
    is_affine(images)
}

fn validate_bijection<const SIZE: usize>(images: &[usize; SIZE]) -> Result<(), PermutationError> {
    let mut seen = [false; SIZE];
    for (position, &image) in images.iter().enumerate() {
        if image >= SIZE {
            return Err(PermutationError::OutOfRange {
                position,
                image,
                size: SIZE,
            });
        }
        if std::mem::replace(&mut seen[image], true) {
            return Err(PermutationError::Repeated { image });
        }
    }
    Ok(())
}
