//! Full-screen text frame renderer:
//! - every row truncated and space-padded to the terminal width
//! - every row of the terminal rewritten each frame, so stale text from a
//!   longer previous frame is overwritten without screen diffing
//! - one buffered write per frame

use std::io::Write;

use crate::core::{constants::HEADER_ROWS, geometry::TermSize};

// --- Helpers ---

/// ANSI CUP for a 0-based `(row, col)`.
#[inline]
pub fn move_to(out: &mut (impl Write + ?Sized), row: usize, col: usize) -> std::io::Result<()> {
    write!(out, "\x1b[{};{}H", row + 1, col + 1)
}

/// Copy at most `cols` chars of `line` into `buf`, then pad with spaces to
/// exactly `cols` chars.
fn push_fitted(buf: &mut String, line: &str, cols: usize) {
    let mut n = 0;
    for ch in line.chars().take(cols) {
        buf.push(ch);
        n += 1;
    }
    buf.extend(std::iter::repeat_n(' ', cols - n));
}

/// One screenful of rows, each exactly `size.cols` chars wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
    size: TermSize,
}

impl Frame {
    /// Lay out `stamp`, a blank row, then the sample's lines, clipped to
    /// `size`.
    #[must_use]
    pub fn compose(stamp: &str, sample: &str, size: TermSize) -> Self {
        let mut text = sample.to_owned();
        if !text.ends_with('\n') {
            text.push('\n');
        }

        let header = [stamp, ""];
        let mut lines = header
            .into_iter()
            .chain(text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)));

        let rows = (0..size.rows)
            .map(|_| {
                let mut row = String::with_capacity(size.cols);
                push_fitted(&mut row, lines.next().unwrap_or(""), size.cols);
                row
            })
            .collect();

        Self { rows, size }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> TermSize {
        self.size
    }

    /// Rows of the frame that carry sample text.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &[String] {
        self.rows.get(HEADER_ROWS..).unwrap_or(&[])
    }
}

/// Writes frames to a terminal, reusing one buffer across frames.
#[derive(Default)]
pub struct Renderer {
    buf: Vec<u8>,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Home the cursor, paint every row, park the cursor bottom-right.
    pub fn render(
        &mut self,
        out: &mut (impl Write + ?Sized),
        frame: &Frame,
    ) -> std::io::Result<()> {
        self.buf.clear();
        move_to(&mut self.buf, 0, 0)?;

        let last = frame.rows.len().saturating_sub(1);
        for (i, row) in frame.rows.iter().enumerate() {
            self.buf.extend_from_slice(row.as_bytes());
            if i < last {
                self.buf.push(b'\n');
            }
        }

        let TermSize { cols, rows } = frame.size;
        move_to(&mut self.buf, rows.saturating_sub(1), cols.saturating_sub(1))?;

        out.write_all(&self.buf)?;
        out.flush()
    }
}
