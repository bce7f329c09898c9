//! Surfaces a single sample of a result, which is enough to keep the computation observable.

use std::fmt;
use std::io::{self, Write};

use num_complex::Complex64;

/// One designated sample of a sequence, ready to be printed as
/// `<label>[<index>] = <re> + <im>i` with six decimal digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleReport<'a> {
    label: &'a str,
    index: usize,
    value: Complex64,
}

impl<'a> SampleReport<'a> {
    /// Picks `sequence[index]`, or `None` if the index is out of range
    pub fn new(label: &'a str, sequence: &[Complex64], index: usize) -> Option<Self> {
        sequence.get(index).map(|&value| Self {
            label,
            index,
            value,
        })
    }

    pub fn value(&self) -> Complex64 {
        self.value
    }

    /// Writes the report followed by a newline
    pub fn emit<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl fmt::Display for SampleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] = {:.6} + {:.6}i",
            self.label, self.index, self.value.re, self.value.im
        )
    }
}
