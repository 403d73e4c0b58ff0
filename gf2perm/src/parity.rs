/// Parity of the set bits of `value`, `true` when an odd number of bits is set.
#[inline]
#[must_use]
pub fn parity(value: usize) -> bool {
    value.count_ones() & 1 == 1
}

/// Parity of the bitwise product of `left` and `right`, the GF(2) dot product of the two bit vectors.
#[inline]
#[must_use]
pub fn dot_parity(left: usize, right: usize) -> bool {
    parity(left & right)
}
