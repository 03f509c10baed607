use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates `num_rows` rows of `num_cols` values in `[0, max_value)`.
pub fn generate_rows(seed: u64, num_rows: usize, num_cols: usize, max_value: i32) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_rows)
        .map(|_| (0..num_cols).map(|_| rng.gen_range(0..max_value)).collect())
        .collect()
}

/// Runs `f` and returns its result with the elapsed wall time.
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Average nanoseconds per operation.
pub fn nanos_per_op(elapsed: Duration, ops: usize) -> f64 {
    if ops == 0 {
        0.0
    } else {
        elapsed.as_nanos() as f64 / ops as f64
    }
}
