use std::ops::BitXor;

/// Checks whether `table` is an affine map over GF(2).
///
/// The table is read as a function from GF(2)^n, `n = log2(table.len())`, into bit vectors
/// (`usize` words or single `bool` bits). It is affine when `f(x) = L(x) ^ f(0)` for a linear `L`.
///
/// Every non-zero `x` splits into `low = x & (x - 1)` and its lowest set bit `x ^ low`, with
/// `low < x`. Linearity of `g(x) = f(x) ^ f(0)` is therefore equivalent to
/// `g(x) == g(low) ^ g(x ^ low)` for all non-zero `x`, which is what is checked.
///
/// # Panics
///
/// Debug-asserts that the length of `table` is a power of two.
#[must_use]
pub fn is_affine<T>(table: &[T]) -> bool
where
    T: Copy + BitXor<Output = T> + PartialEq,
{
    debug_assert!(
        table.is_empty() || table.len().is_power_of_two(),
        "table length {} is not a power of two",
        table.len()
    );
    let Some(&offset) = table.first() else {
        return true;
    };
    let shifted = |index: usize| table[index] ^ offset;
    (1..table.len()).all(|index| {
        let low = index & (index - 1);
        shifted(index) == shifted(low) ^ shifted(index ^ low)
    })
}

/// Checks affinity through `f(a ^ b ^ c) == f(a) ^ f(b) ^ f(c)` for all triples.
///
/// Cubic in the table length. Independent of [`is_affine`], useful for cross-checking it.
#[must_use]
pub fn is_affine_by_triples<T>(table: &[T]) -> bool
where
    T: Copy + BitXor<Output = T> + PartialEq,
{
    let size = table.len();
    debug_assert!(size == 0 || size.is_power_of_two());
    (0..size).all(|a| {
        (0..size).all(|b| (0..size).all(|c| table[a ^ b ^ c] == table[a] ^ table[b] ^ table[c]))
    })
}
