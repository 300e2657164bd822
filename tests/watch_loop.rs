use std::{
    cell::Cell,
    collections::VecDeque,
    io::{self, Write},
    time::Duration,
};

use anyhow::anyhow;
use proptest::prelude::*;
use termwatch::{
    Cancellation, StopReason, TermSize, Terminal, Watch, WatchConfig, WatchError, WatchSummary,
};

// --- Test doubles ---

struct Sink {
    buf: Vec<u8>,
    fail: bool,
}

impl Write for Sink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"));
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory terminal. Sizes are consumed one per frame; the last repeats.
struct FakeTerminal {
    sizes: VecDeque<TermSize>,
    raw: bool,
    enters: u32,
    restores: u32,
    fail_enter: bool,
    out: Sink,
}

impl FakeTerminal {
    fn new(sizes: &[(usize, usize)]) -> Self {
        Self {
            sizes: sizes.iter().map(|&(c, r)| TermSize::new(c, r)).collect(),
            raw: false,
            enters: 0,
            restores: 0,
            fail_enter: false,
            out: Sink {
                buf: Vec::new(),
                fail: false,
            },
        }
    }

    fn output(&self) -> String {
        String::from_utf8(self.out.buf.clone()).unwrap()
    }

    /// Rows of every painted frame.
    fn frames(&self) -> Vec<Vec<String>> {
        self.output()
            .split("\x1b[1;1H")
            .skip(1)
            .map(|chunk| {
                let body = &chunk[..chunk.rfind("\x1b[").unwrap()];
                body.split('\n').map(str::to_owned).collect()
            })
            .collect()
    }
}

impl Terminal for FakeTerminal {
    fn enter_raw(&mut self) -> io::Result<()> {
        self.enters += 1;
        self.raw = true;
        if self.fail_enter {
            return Err(io::Error::other("tcsetattr failed"));
        }
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.restores += 1;
        self.raw = false;
        Ok(())
    }

    fn size(&mut self) -> TermSize {
        if self.sizes.len() > 1 {
            self.sizes.pop_front().unwrap()
        } else {
            self.sizes[0]
        }
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}

/// Cancels after `waits` inter-frame waits.
struct Countdown {
    waits: Cell<u32>,
    cancelled: Cell<bool>,
}

impl Countdown {
    fn after_waits(waits: u32) -> Self {
        Self {
            waits: Cell::new(waits),
            cancelled: Cell::new(false),
        }
    }

    fn already() -> Self {
        let c = Self::after_waits(0);
        c.cancelled.set(true);
        c
    }
}

impl Cancellation for Countdown {
    fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    fn wait(&self, _period: Duration) -> bool {
        match self.waits.get() {
            0 => {
                self.cancelled.set(true);
                true
            }
            n => {
                self.waits.set(n - 1);
                false
            }
        }
    }
}

fn fast() -> WatchConfig {
    WatchConfig::builder().period(Duration::ZERO).build().unwrap()
}

fn run<S: termwatch::Sampler>(
    term: &mut FakeTerminal,
    cancel: &Countdown,
    cfg: WatchConfig,
    sampler: S,
) -> Result<WatchSummary, WatchError> {
    Watch::new(cfg, sampler).run(term, cancel)
}

fn assert_fits(frame: &[String], size: (usize, usize)) {
    assert_eq!(frame.len(), size.1, "row count");
    for row in frame {
        assert_eq!(row.chars().count(), size.0, "row {row:?}");
    }
}

// --- Tests ---

#[test]
fn redraws_until_cancelled() {
    let mut term = FakeTerminal::new(&[(12, 6)]);
    let mut n = 0;
    let summary = run(&mut term, &Countdown::after_waits(2), fast(), || {
        n += 1;
        Ok::<_, anyhow::Error>(format!("sample {n}"))
    })
    .unwrap();

    assert_eq!(summary.frames, 3);
    assert_eq!(summary.failed_frames, 0);
    assert_eq!(summary.reason, StopReason::Interrupted);

    let frames = term.frames();
    assert_eq!(frames.len(), 3);
    for (i, f) in frames.iter().enumerate() {
        assert_fits(f, (12, 6));
        assert_eq!(f[1], " ".repeat(12));
        assert_eq!(f[2], format!("{:<12}", format!("sample {}", i + 1)));
    }
    // header is a millisecond timestamp, cut to the width
    assert_eq!(frames[0][0].len(), 12);
    assert!(frames[0][0].starts_with("20"));
}

#[test]
fn restores_terminal_after_zero_frames() {
    let mut term = FakeTerminal::new(&[(10, 4)]);
    let summary = run(&mut term, &Countdown::already(), fast(), || {
        Ok::<_, anyhow::Error>("never drawn")
    })
    .unwrap();

    assert_eq!(summary.frames, 0);
    assert_eq!(summary.reason, StopReason::Interrupted);
    assert!(!term.raw);
    assert_eq!(term.enters, 1);
    assert_eq!(term.restores, 1);
    assert_eq!(term.output(), "\n");
}

#[test]
fn restores_terminal_after_one_and_many_frames() {
    for waits in [0, 1, 25] {
        let mut term = FakeTerminal::new(&[(8, 3)]);
        let summary = run(&mut term, &Countdown::after_waits(waits), fast(), || {
            Ok::<_, anyhow::Error>("x")
        })
        .unwrap();
        assert_eq!(summary.frames, u64::from(waits) + 1);
        assert!(!term.raw, "raw mode left on after {waits} waits");
        assert_eq!(term.restores, 1);
        assert!(term.output().ends_with("\x1b[3;8H\n"));
    }
}

#[test]
fn frame_limit_stops_normally() {
    let mut term = FakeTerminal::new(&[(5, 5)]);
    let cfg = WatchConfig::builder()
        .period(Duration::ZERO)
        .max_frames(4)
        .build()
        .unwrap();
    let summary = run(&mut term, &Countdown::after_waits(100), cfg, || {
        Ok::<_, anyhow::Error>(1)
    })
    .unwrap();
    assert_eq!(summary.frames, 4);
    assert_eq!(summary.reason, StopReason::FrameLimit);
    assert!(!term.raw);
}

#[test]
fn follows_resizes_between_frames() {
    let mut term = FakeTerminal::new(&[(20, 8), (6, 3), (9, 4)]);
    run(&mut term, &Countdown::after_waits(2), fast(), || {
        Ok::<_, anyhow::Error>("0123456789abcdef\nsecond")
    })
    .unwrap();

    let frames = term.frames();
    assert_fits(&frames[0], (20, 8));
    assert_fits(&frames[1], (6, 3));
    assert_fits(&frames[2], (9, 4));
    assert_eq!(frames[1][2], "012345");
    assert_eq!(frames[2][3], "second   ");
    assert!(term.output().contains("\x1b[3;6H"));
}

#[test]
fn shorter_sample_overwrites_longer_one() {
    let mut term = FakeTerminal::new(&[(10, 5)]);
    let mut texts = ["a long line\nmore\nand more", "ok"].into_iter();
    run(&mut term, &Countdown::after_waits(1), fast(), move || {
        Ok::<_, anyhow::Error>(texts.next().unwrap_or_default())
    })
    .unwrap();

    let frames = term.frames();
    assert_eq!(frames[1][2..], ["ok        ", "          ", "          "]);
}

#[test]
fn failing_sampler_is_drawn_and_loop_continues() {
    let mut term = FakeTerminal::new(&[(40, 10)]);
    let mut n = 0;
    let summary = run(&mut term, &Countdown::after_waits(2), fast(), || {
        n += 1;
        if n % 2 == 1 {
            Err(anyhow!("backend unreachable (attempt {n})"))
        } else {
            Ok(format!("recovered {n}"))
        }
    })
    .unwrap();

    assert_eq!(summary.frames, 3);
    assert_eq!(summary.failed_frames, 2);
    let frames = term.frames();
    assert!(frames[0][2].starts_with("backend unreachable (attempt 1)"));
    assert!(frames[1][2].starts_with("recovered 2"));
    assert!(frames[2][2].starts_with("backend unreachable (attempt 3)"));
}

#[test]
fn panicking_sampler_is_drawn_and_loop_continues() {
    let mut term = FakeTerminal::new(&[(40, 4)]);
    let summary = run(&mut term, &Countdown::after_waits(1), fast(), || -> anyhow::Result<u8> {
        panic!("index out of range")
    })
    .unwrap();
    assert_eq!(summary.frames, 2);
    assert_eq!(summary.failed_frames, 2);
    assert!(term.frames()[1][2].starts_with("sampler panicked: index out of range"));
}

#[test]
fn render_fault_propagates_after_teardown() {
    let mut term = FakeTerminal::new(&[(10, 4)]);
    term.out.fail = true;
    let err = run(&mut term, &Countdown::after_waits(5), fast(), || {
        Ok::<_, anyhow::Error>("x")
    })
    .unwrap_err();

    assert!(matches!(err, WatchError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert!(!term.raw);
    assert_eq!(term.restores, 1);
}

#[test]
fn setup_fault_still_restores() {
    let mut term = FakeTerminal::new(&[(10, 4)]);
    term.fail_enter = true;
    let mut calls = 0;
    let err = run(&mut term, &Countdown::after_waits(5), fast(), || {
        calls += 1;
        Ok::<_, anyhow::Error>("x")
    })
    .unwrap_err();

    assert!(matches!(err, WatchError::Io(_)));
    assert_eq!(calls, 0);
    assert!(!term.raw);
    assert_eq!(term.restores, 1);
    assert_eq!(term.output(), "\n");
}

proptest! {
    #[test]
    fn prop_every_row_fills_the_terminal(
        cols in 1usize..120,
        rows in 1usize..60,
        lines in proptest::collection::vec("[ -~é]{0,200}", 0..80),
    ) {
        let mut term = FakeTerminal::new(&[(cols, rows)]);
        let text = lines.join("\n");
        run(&mut term, &Countdown::after_waits(0), fast(), move || {
            Ok::<_, anyhow::Error>(text.clone())
        })
        .unwrap();

        let frames = term.frames();
        prop_assert_eq!(frames.len(), 1);
        prop_assert!(frames[0].len() <= rows);
        prop_assert_eq!(frames[0].len(), rows);
        for row in &frames[0] {
            prop_assert_eq!(row.chars().count(), cols);
        }
    }
}
