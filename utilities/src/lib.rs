pub extern crate rustfft;

// export rustfft to microbench
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;
use rustfft::FftPlanner;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex sequences agree component-wise to within `epsilon`.
///
/// # Panics
///
/// Panics if the lengths differ or any component is too far from its expected value
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    epsilon: T,
) {
    assert_eq!(actual.len(), expected.len(), "sequence lengths differ");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if (a.re - e.re).abs() >= epsilon || (a.im - e.im).abs() >= epsilon {
            panic!(
                "Assertion failed at index {i}: {a} too far from expected value {e} (with epsilon {epsilon})",
            );
        }
    }
}

/// Generate a random, complex, signal in the provided buffer
pub fn gen_random_signal<T>(signal: &mut [Complex<T>])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for z in signal.iter_mut() {
        z.re = uniform_dist.sample(&mut rng);
        z.im = uniform_dist.sample(&mut rng);
    }
}

/// Forward FFT of `signal` computed by `rustfft`, used as an independent reference
pub fn reference_fft(signal: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut buffer = signal.to_vec();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}
