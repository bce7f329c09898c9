//! Deterministic input signals for the transform benchmark

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::FftError;
use crate::fft::{try_alloc, validate_len};

/// The `n` points of the unit circle, traversed once.
///
/// Sample `i` is `cos(2πi/n) + i·sin(2πi/n)`. The forward transform of this signal is `n` at bin 1
/// and zero everywhere else.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] if `n` is zero or not a power of two, and
/// [`FftError::Allocation`] if the sequence cannot be allocated.
pub fn unit_circle(n: usize) -> Result<Vec<Complex64>, FftError> {
    validate_len(n)?;
    let mut signal = try_alloc(n)?;

    signal.iter_mut().enumerate().for_each(|(i, z)| {
        let theta = 2.0 * PI * i as f64 / n as f64;
        *z = Complex64::new(theta.cos(), theta.sin());
    });

    Ok(signal)
}
