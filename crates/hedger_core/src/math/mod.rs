//! Vector maths helpers.
//!
//! The accounting rules of the hedging engine are written entirely in
//! terms of dot products between delta/quantity vectors and spot vectors.

/// Dot product of two equal-length slices.
///
/// # Panics
/// Panics in debug builds if the slices have different lengths. Callers
/// uphold the positional-alignment invariant: deltas, quantities, and
/// spot vectors all follow the configured instrument order.
///
/// # Examples
///
/// ```
/// use hedger_core::math::dot;
///
/// assert_eq!(dot(&[0.5, 0.3], &[100.0, 50.0]), 65.0);
/// assert_eq!(dot(&[], &[]), 0.0);
/// ```
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dot product length mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
