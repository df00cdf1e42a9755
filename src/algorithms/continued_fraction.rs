//! Lambert continued fraction for tan(x)
//!
//! tan(x) = 1 / (1/x - 1 / (3/x - 1 / (5/x - ...)))
//!
//! The fraction is folded from the deepest level outward.

/// Approximate tan(x) with `n` levels of the continued fraction.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn cfrac_tan(x: f64, n: u32) -> f64 {
    assert!(n > 0, "continued fraction depth must be at least 1");

    let mut k = f64::from(2 * n - 1);
    let mut result = 1.0 / (k / x);

    for _ in 1..n {
        k -= 2.0;
        result = 1.0 / (k / x - result);
    }

    result
}
