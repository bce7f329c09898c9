use std::f64::consts::PI;

use num_complex::Complex64;

use crate::planner::Direction;

/// The `k`-th twiddle factor of an `n`-point transform, `e^(∓2πik/n)`.
///
/// Computed from scratch on every call. Nothing is cached between combine steps or between
/// transforms, so the value depends on `(k, n, direction)` only.
#[inline]
pub(crate) fn twiddle(k: usize, n: usize, direction: Direction) -> Complex64 {
    let theta = direction.sign() * 2.0 * PI * k as f64 / n as f64;
    let (st, ct) = theta.sin_cos();
    Complex64::new(ct, st)
}
