//! Terminal size plumbing.

use std::env;

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{FALLBACK_COLS, FALLBACK_ROWS};

/// Character grid of the terminal, both sides at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TermSize {
    pub cols: usize,
    pub rows: usize,
}

impl TermSize {
    #[inline]
    #[must_use]
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Combine `COLUMNS` / `LINES` with whatever the terminal reported.
    ///
    /// * An env value wins when it parses as a positive integer.
    /// * Otherwise the detected size is used for that field.
    /// * Missing or zero detection falls back to 80×24.
    #[must_use]
    pub fn resolve(
        cols_env: Option<&str>,
        lines_env: Option<&str>,
        detected: Option<(Width, Height)>,
    ) -> Self {
        let (det_cols, det_rows) =
            detected.map_or((0, 0), |(w, h)| (usize::from(w.0), usize::from(h.0)));

        let pick = |env: Option<&str>, det: usize, fallback: usize| {
            env.and_then(parse_positive)
                .or((det > 0).then_some(det))
                .unwrap_or(fallback)
        };

        Self {
            cols: pick(cols_env, det_cols, FALLBACK_COLS),
            rows: pick(lines_env, det_rows, FALLBACK_ROWS),
        }
    }
}

fn parse_positive(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// Current terminal geometry, re-read on every call so resizes are picked up.
#[inline]
#[must_use]
pub fn terminal_geometry() -> TermSize {
    let cols = env::var("COLUMNS").ok();
    let lines = env::var("LINES").ok();
    TermSize::resolve(cols.as_deref(), lines.as_deref(), terminal_size())
}
