//! Branch-heavy counting loop.
//!
//! Each iteration draws a number in `0..100` and either increments or decrements a counter
//! depending on whether it is below 50. The outcome of the comparison is unpredictable, which is
//! the whole point: the loop exercises the branch predictor and little else.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Runs `iterations` coin flips from a PRNG seeded with `seed` and returns the final count.
pub fn branch_count(iterations: u64, seed: u64) -> i64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut count: i64 = 0;

    for _ in 0..iterations {
        let x: u32 = rng.gen_range(0..100);
        if x < 50 {
            count += 1;
        } else {
            count -= 1;
        }
    }

    count
}
