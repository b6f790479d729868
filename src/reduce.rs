//! Barrett reduction into the canonical range [0, q).
//!
//! t = ⌊a·μ / 2^k⌋ with μ = ⌊2^k / q⌋ under-approximates or over-approximates
//! ⌊a/q⌋ by at most one for every i32 input, so a single conditional
//! correction in either direction lands in [0, q).
//!
//! ⚠️ NOT CONSTANT-TIME. The correction is a data-dependent branch.

use crate::params::{BARRETT_K, BARRETT_MU, Q};

/// Reduce any `i32` to its representative in [0, q).
#[inline(always)]
#[must_use]
pub const fn barrett_reduce(a: i32) -> u16 {
    let q = Q as i64;
    let t = (a as i64 * BARRETT_MU) >> BARRETT_K;
    let mut r = a as i64 - t * q;
    if r < 0 {
        r += q;
    } else if r >= q {
        r -= q;
    }
    r as u16
}
