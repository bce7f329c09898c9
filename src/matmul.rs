//! Dense square matrix multiply, the direct triple loop with no blocking or tiling.

use std::ops::{Index, IndexMut};

use crate::error::MatrixError;

/// Square, row-major matrix of `f64`, owned and sized at construction time
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    pub fn from_fn<F: FnMut(usize, usize) -> f64>(n: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// The benchmark operands, `A[i][j] = (i + j) mod 100` and `B[i][j] = (i - j) rem 100`.
    ///
    /// `rem` truncates toward zero, so `B` holds negative entries below the diagonal.
    pub fn benchmark_pair(n: usize) -> (Matrix, Matrix) {
        let a = Self::from_fn(n, |i, j| ((i + j) % 100) as f64);
        let b = Self::from_fn(n, |i, j| ((i as i64 - j as i64) % 100) as f64);
        (a, b)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// `self * rhs`
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the operands are not the same size.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.n != rhs.n {
            return Err(MatrixError::DimensionMismatch {
                left: self.n,
                right: rhs.n,
            });
        }

        let n = self.n;
        let mut out = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }

        Ok(out)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.n + j]
    }
}
