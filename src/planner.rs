//! Direction of a transform.
//!
//! The only thing that distinguishes the forward transform from the inverse one is the sign of the
//! exponent in the twiddle factor (plus the final `1/N` scaling of the inverse).

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Twiddle factors are `e^(-2πik/N)`
    #[default]
    Forward,
    /// Twiddle factors are `e^(+2πik/N)`
    Reverse,
}

impl Direction {
    /// Sign of the exponent term in the twiddle factor
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Reverse => 1.0,
        }
    }
}
