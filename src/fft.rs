//! Recursive radix-2 Cooley-Tukey FFT, decimation in time.
//!
//! Every frame of the recursion splits its input into the even- and odd-indexed samples,
//! transforms both halves, and recombines them with one twiddle factor per output pair:
//!
//! ```text
//! X[k]       = E[k] + w^k * O[k]
//! X[k + N/2] = E[k] - w^k * O[k]        for k in 0..N/2, w = e^(-2πi/N)
//! ```
//!
//! ## Memory
//!
//! A single scratch buffer of `N` samples is reserved per top-level call. A frame writes its even
//! samples into the front half of its scratch slice and its odd samples into the back half; those
//! two halves are owned by that frame alone until its combine step has consumed them. Once the
//! samples have been copied out, the frame's own input slice is dead, so its two halves serve as
//! the children's scratch. No allocation happens below the top level.
use num_complex::Complex64;
use num_traits::Zero;

use crate::error::FftError;
use crate::options::Options;
use crate::parallel::run_maybe_in_parallel;
use crate::planner::Direction;
use crate::twiddles::twiddle;

/// Checks that `len` is a valid transform size
pub(crate) fn validate_len(len: usize) -> Result<(), FftError> {
    if len == 0 || !len.is_power_of_two() {
        return Err(FftError::InvalidSize { len });
    }
    Ok(())
}

/// Reserves a zeroed buffer of `len` samples, reporting failure instead of aborting
pub(crate) fn try_alloc(len: usize) -> Result<Vec<Complex64>, FftError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| FftError::Allocation { len, source })?;
    buf.resize(len, Complex64::zero());
    Ok(buf)
}

fn try_copy(signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    let len = signal.len();
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| FftError::Allocation { len, source })?;
    buf.extend_from_slice(signal);
    Ok(buf)
}

/// Forward FFT of `signal`, returned in a new buffer.
///
/// # Errors
///
/// [`FftError::InvalidSize`] if the length is zero or not a power of two,
/// [`FftError::Allocation`] if the output or the scratch buffer cannot be allocated.
pub fn transform(signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    transform_out_of_place(signal, Direction::Forward, &Options::default())
}

/// Inverse FFT of `signal`, scaled by `1/N`, returned in a new buffer.
///
/// # Errors
///
/// Same as [`transform`].
pub fn inverse(signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    transform_out_of_place(signal, Direction::Reverse, &Options::default())
}

/// Forward FFT, in place. On error `signal` is left untouched.
pub fn transform_in_place(signal: &mut [Complex64]) -> Result<(), FftError> {
    transform_with_opts(signal, Direction::Forward, &Options::default())
}

/// Inverse FFT scaled by `1/N`, in place. On error `signal` is left untouched.
pub fn inverse_in_place(signal: &mut [Complex64]) -> Result<(), FftError> {
    transform_with_opts(signal, Direction::Reverse, &Options::default())
}

/// Out-of-place FFT in either direction with explicit [`Options`]
pub fn transform_out_of_place(
    signal: &[Complex64],
    direction: Direction,
    opts: &Options,
) -> Result<Vec<Complex64>, FftError> {
    validate_len(signal.len())?;
    let mut output = try_copy(signal)?;
    transform_with_opts(&mut output, direction, opts)?;
    Ok(output)
}

/// FFT in either direction with explicit [`Options`], in place
///
/// The size is validated and the scratch buffer reserved before any sample is touched, so a
/// failed call never leaves `signal` partially transformed.
///
/// # Errors
///
/// [`FftError::InvalidSize`] if `signal.len()` is zero or not a power of two,
/// [`FftError::Allocation`] if the scratch buffer cannot be allocated.
pub fn transform_with_opts(
    signal: &mut [Complex64],
    direction: Direction,
    opts: &Options,
) -> Result<(), FftError> {
    let n = signal.len();
    validate_len(n)?;
    log::debug!(
        "fft: n = {n}, direction = {direction:?}, multithreaded = {}, max_parallel_depth = {}",
        opts.multithreaded,
        opts.max_parallel_depth
    );

    let mut scratch = try_alloc(n)?;
    recursive_fft(signal, &mut scratch, direction, opts, 0);

    // Scaling for inverse transform
    if let Direction::Reverse = direction {
        let scaling_factor = 1.0 / n as f64;
        signal.iter_mut().for_each(|z| *z *= scaling_factor);
    }

    Ok(())
}

/// Transforms `data` in place, using `scratch` (same length) for the even/odd halves.
fn recursive_fft(
    data: &mut [Complex64],
    scratch: &mut [Complex64],
    direction: Direction,
    opts: &Options,
    depth: usize,
) {
    let n = data.len();
    debug_assert_eq!(n, scratch.len());
    if n <= 1 {
        return;
    }
    let half = n >> 1;

    // Divide
    let (even, odd) = scratch.split_at_mut(half);
    data.chunks_exact(2)
        .zip(even.iter_mut())
        .zip(odd.iter_mut())
        .for_each(|((pair, e), o)| {
            *e = pair[0];
            *o = pair[1];
        });

    // Conquer
    let (data_lo, data_hi) = data.split_at_mut(half);
    run_maybe_in_parallel(
        opts.fork_at(depth, n),
        || recursive_fft(even, data_lo, direction, opts, depth + 1),
        || recursive_fft(odd, data_hi, direction, opts, depth + 1),
    );

    // Combine
    let (even, odd) = scratch.split_at(half);
    combine(data, even, odd, direction);
}

#[inline]
fn combine(output: &mut [Complex64], even: &[Complex64], odd: &[Complex64], direction: Direction) {
    let n = output.len();
    let (out_lo, out_hi) = output.split_at_mut(n >> 1);

    out_lo
        .iter_mut()
        .zip(out_hi.iter_mut())
        .zip(even.iter().zip(odd.iter()))
        .enumerate()
        .for_each(|(k, ((x_lo, x_hi), (e, o)))| {
            let product = twiddle(k, n, direction) * o;
            *x_lo = e + product;
            *x_hi = e - product;
        });
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use utilities::{assert_complex_closeness, gen_random_signal, reference_fft};

    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn energy(signal: &[Complex64]) -> f64 {
        signal.iter().map(|z| z.norm_sqr()).sum()
    }

    fn complex_vec(n: usize) -> impl Strategy<Value = Vec<Complex64>> {
        vec((-1.0f64..1.0, -1.0f64..1.0), n)
            .prop_map(|pairs| pairs.into_iter().map(|(re, im)| c(re, im)).collect())
    }

    fn any_signal() -> impl Strategy<Value = Vec<Complex64>> {
        (0u32..=10).prop_flat_map(|log_n| complex_vec(1 << log_n))
    }

    fn signal_pair() -> impl Strategy<Value = (Vec<Complex64>, Vec<Complex64>)> {
        (0u32..=10).prop_flat_map(|log_n| (complex_vec(1 << log_n), complex_vec(1 << log_n)))
    }

    #[test]
    fn output_length_matches_input() {
        for log_n in 0..=10 {
            let n = 1 << log_n;
            let mut signal = vec![Complex64::zero(); n];
            gen_random_signal(&mut signal);
            assert_eq!(transform(&signal).unwrap().len(), n);
        }
    }

    #[test]
    fn impulse() {
        let signal = [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)];
        let spectrum = transform(&signal).unwrap();
        assert_complex_closeness(&spectrum, &[c(1.0, 0.0); 4], 1e-9);
    }

    #[test]
    fn constant() {
        let signal = [c(1.0, 0.0); 4];
        let spectrum = transform(&signal).unwrap();
        assert_complex_closeness(
            &spectrum,
            &[c(4.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
            1e-9,
        );
    }

    #[test]
    fn single_sample_is_its_own_transform() {
        let signal = [c(0.25, -3.5)];
        assert_eq!(transform(&signal).unwrap(), signal.to_vec());
        assert_eq!(inverse(&signal).unwrap(), signal.to_vec());
    }

    #[test]
    fn zero_in_zero_out() {
        for log_n in 0..=10 {
            let signal = vec![Complex64::zero(); 1 << log_n];
            let spectrum = transform(&signal).unwrap();
            assert!(spectrum.iter().all(|z| z.is_zero()));
        }
    }

    #[test]
    fn unit_circle_lands_in_bin_one() {
        let n = 1024;
        let signal = crate::signal::unit_circle(n).unwrap();
        let spectrum = transform(&signal).unwrap();

        let mut expected = vec![Complex64::zero(); n];
        expected[1] = c(n as f64, 0.0);
        assert_complex_closeness(&spectrum, &expected, 1e-12 * n as f64);
    }

    #[test]
    fn matches_rustfft() {
        for log_n in 0..=12 {
            let n = 1 << log_n;
            let signal: Vec<Complex64> = (1..=n)
                .map(|i| c(f64::from(i), f64::from(i)))
                .collect();

            let spectrum = transform(&signal).unwrap();
            let expected = reference_fft(&signal);
            assert_complex_closeness(&spectrum, &expected, 1e-9 * n as f64);
        }
    }

    #[test]
    fn in_place_matches_out_of_place() {
        let mut signal = vec![Complex64::zero(); 256];
        gen_random_signal(&mut signal);

        let spectrum = transform(&signal).unwrap();
        transform_in_place(&mut signal).unwrap();
        assert_eq!(signal, spectrum);

        let restored = inverse(&spectrum).unwrap();
        inverse_in_place(&mut signal).unwrap();
        assert_eq!(signal, restored);
    }

    #[test]
    fn parallel_is_bit_identical() {
        let opts = Options {
            multithreaded: true,
            max_parallel_depth: 4,
            sequential_threshold: 2,
        };

        for log_n in [1, 3, 8, 14] {
            let mut signal = vec![Complex64::zero(); 1 << log_n];
            gen_random_signal(&mut signal);

            let sequential = transform(&signal).unwrap();
            let parallel = transform_out_of_place(&signal, Direction::Forward, &opts).unwrap();
            assert_eq!(sequential, parallel);
        }
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        for len in [0, 3, 6, 12, 1000] {
            let signal = vec![c(1.0, 1.0); len];
            assert!(matches!(
                transform(&signal),
                Err(FftError::InvalidSize { len: l }) if l == len
            ));
            assert!(matches!(
                inverse(&signal),
                Err(FftError::InvalidSize { .. })
            ));
        }
    }

    #[test]
    fn failed_transform_leaves_input_untouched() {
        let mut signal: Vec<Complex64> = (0..6).map(|i| c(f64::from(i), 0.0)).collect();
        let before = signal.clone();
        assert!(transform_in_place(&mut signal).is_err());
        assert_eq!(signal, before);
    }

    #[test]
    fn allocation_failure_is_reported() {
        let len = usize::MAX >> 1;
        match try_alloc(len) {
            Err(FftError::Allocation { len: l, .. }) => assert_eq!(l, len),
            other => panic!("expected an allocation error, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_roundtrip(signal in any_signal()) {
            let restored = inverse(&transform(&signal).unwrap()).unwrap();
            for (a, b) in signal.iter().zip(restored.iter()) {
                prop_assert!((a.re - b.re).abs() < 1e-9);
                prop_assert!((a.im - b.im).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_linearity((a, b) in signal_pair()) {
            let sum: Vec<Complex64> = a.iter().zip(b.iter()).map(|(x, y)| x + y).collect();
            let lhs = transform(&sum).unwrap();
            let fa = transform(&a).unwrap();
            let fb = transform(&b).unwrap();
            for (l, (x, y)) in lhs.iter().zip(fa.iter().zip(fb.iter())) {
                let r = x + y;
                prop_assert!((l.re - r.re).abs() < 1e-9);
                prop_assert!((l.im - r.im).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_parseval(signal in any_signal()) {
            let time = energy(&signal);
            prop_assume!(time > 0.0);
            let freq = energy(&transform(&signal).unwrap()) / signal.len() as f64;
            prop_assert!((time - freq).abs() <= 1e-9 * time);
        }
    }
}
