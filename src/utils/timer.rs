//! Wall-clock timing of a single call.
//!
//! Trials are timed exactly once, so there is no warmup or repetition here:
//! the monotonic clock is sampled immediately around the call and nothing
//! else runs between the two samples.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Run `f` once and return how long it took along with its result.
#[inline(always)]
pub fn time_call<R>(f: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = black_box(f());
    let elapsed = start.elapsed();
    (elapsed, result)
}

/// Convert a duration to fractional milliseconds.
pub fn to_millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
