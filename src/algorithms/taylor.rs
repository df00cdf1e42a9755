//! Truncated Maclaurin series for tan(x)

use crate::core::{TAYLOR_DENOMINATORS, TAYLOR_NUMERATORS, TAYLOR_TABLE_LEN};

/// Sum of the first `n` terms of the tangent series.
///
/// Returns `0.0` for `n >= 13`; callers that need to tell this apart from a
/// real result must check `n` themselves.
pub fn taylor_tan(x: f64, n: u32) -> f64 {
    if n as usize >= TAYLOR_TABLE_LEN {
        return 0.0;
    }

    let x_squared = x * x;
    let mut odd_power = x;
    let mut sum = 0.0;
    for i in 0..n as usize {
        sum += (TAYLOR_NUMERATORS[i] * odd_power) / TAYLOR_DENOMINATORS[i];
        odd_power *= x_squared;
    }

    sum
}
