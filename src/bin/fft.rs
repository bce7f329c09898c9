//! Transforms the unit circle of `N` points and prints the first bin.
use anyhow::{Context, Result};

use microbench::harness::{init_logging, timed};
use microbench::options::Options;
use microbench::planner::Direction;
use microbench::signal::unit_circle;
use microbench::{transform_with_opts, SampleReport};

/// FFT size (must be a power of 2)
const N: usize = 1024;

fn main() -> Result<()> {
    init_logging();

    let mut signal = unit_circle(N).context("failed to generate the input signal")?;
    let opts = Options::guess_options(N);

    timed("fft", || transform_with_opts(&mut signal, Direction::Forward, &opts))
        .context("FFT failed")?;

    let report = SampleReport::new("FFT", &signal, 0).context("FFT produced no output")?;
    report.emit(std::io::stdout().lock())?;
    Ok(())
}
