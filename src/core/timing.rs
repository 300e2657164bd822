//! Wall-clock timing of closures, rendered with [`format_duration`].

use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::duration::format_duration;

/// Run `f` and return how long it took alongside its result.
///
/// Errors are just values here: time a `Result`-returning closure to time
/// failures too.
pub fn timed<T>(f: impl FnOnce() -> T) -> (Duration, T) {
    let start = Instant::now();
    let x = f();
    let elapsed = start.elapsed();
    debug!(elapsed = %format_duration(elapsed), "timed");
    (elapsed, x)
}

/// `[MM:SS.mmm]` label for an elapsed time.
#[inline]
#[must_use]
pub fn elapsed_label(elapsed: Duration) -> String {
    format!("[{}]", format_duration(elapsed))
}

/// Like [`timed`], with the elapsed time already formatted.
pub fn timed_format<T>(f: impl FnOnce() -> T) -> (String, T) {
    let (elapsed, x) = timed(f);
    (elapsed_label(elapsed), x)
}

/// Like [`timed`], printing the elapsed label to stdout.
pub fn timed_print<T>(f: impl FnOnce() -> T) -> T {
    let (label, x) = timed_format(f);
    println!("{label}");
    x
}
