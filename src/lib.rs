//! CPU micro-benchmarks.
//!
//! Three single-pass workloads, each driven by its own binary under `src/bin`:
//!
//! - `fft`: a recursive radix-2 Cooley-Tukey transform of a unit-circle signal ([`fft`]).
//! - `matmul`: a direct dense matrix multiply ([`matmul`]).
//! - `branchy`: a counter updated by unpredictable comparisons ([`branch`]).
//!
//! Each computes its result, prints one sample of it, and exits.
//!
//! ```
//! use microbench::{signal::unit_circle, transform, SampleReport};
//!
//! let signal = unit_circle(8)?;
//! let spectrum = transform(&signal)?;
//! let report = SampleReport::new("FFT", &spectrum, 1).unwrap();
//! assert!((report.value().re - 8.0).abs() < 1e-12);
//! assert!(report.to_string().starts_with("FFT[1] = 8.000000 + "));
//! # Ok::<(), microbench::FftError>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `parallel` (default): the even and odd halves of the top recursion levels may be transformed
//!   on the rayon pool, see [`options::Options`].

pub use num_complex::Complex64;

pub use crate::error::{FftError, MatrixError};
pub use crate::fft::{
    inverse, inverse_in_place, transform, transform_in_place, transform_out_of_place,
    transform_with_opts,
};
pub use crate::report::SampleReport;

pub mod branch;
pub mod error;
pub mod fft;
pub mod harness;
pub mod matmul;
pub mod options;
mod parallel;
pub mod planner;
pub mod report;
pub mod signal;
mod twiddles;

/// A single complex value of a sequence
pub type ComplexSample = Complex64;
