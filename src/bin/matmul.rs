//! Multiplies two `N`x`N` matrices and prints one element of the product.
use std::io::Write;

use anyhow::Result;

use microbench::harness::{init_logging, timed};
use microbench::matmul::Matrix;

/// Matrix size
const N: usize = 512;

fn main() -> Result<()> {
    init_logging();

    let (a, b) = Matrix::benchmark_pair(N);
    let c = timed("matmul", || a.multiply(&b))?;

    // Print one element to keep the product observable
    writeln!(std::io::stdout().lock(), "C[0][0] = {:.6}", c[(0, 0)])?;
    Ok(())
}
