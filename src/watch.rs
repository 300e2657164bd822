//! The full-screen polling loop.
//!
//! Each iteration re-reads the terminal size, evaluates the sampler,
//! composes a [`Frame`] and paints it, then waits one period. A failing
//! sampler is drawn, not propagated. Only cancellation (or the optional
//! frame limit) ends the loop normally; any other error propagates after
//! the terminal has been restored.

use std::{
    io::Write,
    time::{Duration, Instant},
};

use tracing::{debug, info, trace};

use crate::{
    core::{
        config::WatchConfig,
        duration::format_duration,
        error::WatchError,
        sample::{Sample, Sampler},
    },
    render::{Frame, Renderer, timestamp_now},
    term::{Cancellation, Interrupt, Terminal, Tty},
};

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Interrupted,
    FrameLimit,
}

/// What a finished watch did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchSummary {
    pub frames: u64,
    /// Frames whose sample was an error or panic.
    pub failed_frames: u64,
    pub elapsed: Duration,
    pub reason: StopReason,
}

/// Raw mode held for the lifetime of one watch.
///
/// Teardown (restore mode, newline) runs exactly once: through `close` on
/// the normal path, through `Drop` when an error unwinds the loop.
struct Session<'t, T: Terminal + ?Sized> {
    term: &'t mut T,
    closed: bool,
}

impl<'t, T: Terminal + ?Sized> Session<'t, T> {
    fn open(term: &'t mut T) -> Result<Self, WatchError> {
        // built before entering so a half-done setup is still torn down
        let mut session = Self {
            term,
            closed: false,
        };
        session.term.enter_raw()?;
        Ok(session)
    }

    fn close(mut self) -> Result<(), WatchError> {
        self.closed = true;
        let restored = self.term.restore();
        let out = self.term.out();
        writeln!(out)?;
        out.flush()?;
        restored?;
        Ok(())
    }
}

impl<T: Terminal + ?Sized> Drop for Session<'_, T> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        let _ = self.term.restore();
        let out = self.term.out();
        let _ = writeln!(out);
        let _ = out.flush();
    }
}

/// A configured watch over one sampler.
pub struct Watch<S> {
    cfg: WatchConfig,
    sampler: S,
    renderer: Renderer,
}

impl<S: Sampler> Watch<S> {
    #[must_use]
    pub fn new(cfg: WatchConfig, sampler: S) -> Self {
        Self {
            cfg,
            sampler,
            renderer: Renderer::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &WatchConfig {
        &self.cfg
    }

    /// Block on `term` until `cancel` fires or the frame limit is reached.
    pub fn run<T, C>(&mut self, term: &mut T, cancel: &C) -> Result<WatchSummary, WatchError>
    where
        T: Terminal + ?Sized,
        C: Cancellation + ?Sized,
    {
        cancel.clear();
        let started = Instant::now();
        let mut frames = 0u64;
        let mut failed_frames = 0u64;

        let mut session = Session::open(term)?;
        info!(period = ?self.cfg.period, max_frames = ?self.cfg.max_frames, "watch started");

        let reason = loop {
            if cancel.is_cancelled() {
                break StopReason::Interrupted;
            }

            let size = session.term.size();
            let sample = Sample::capture(&mut self.sampler);
            if sample.is_failure() {
                failed_frames += 1;
            }

            let frame = Frame::compose(&timestamp_now(), sample.text(), size);
            self.renderer.render(session.term.out(), &frame)?;
            frames += 1;
            trace!(frames, cols = size.cols, rows = size.rows, "frame drawn");

            if self.cfg.max_frames.is_some_and(|max| frames >= max) {
                break StopReason::FrameLimit;
            }
            if cancel.wait(self.cfg.period) {
                break StopReason::Interrupted;
            }
        };

        session.close()?;
        let elapsed = started.elapsed();
        info!(
            frames,
            failed_frames,
            elapsed = %format_duration(elapsed),
            ?reason,
            "watch stopped"
        );
        Ok(WatchSummary {
            frames,
            failed_frames,
            elapsed,
            reason,
        })
    }
}

/// Redraw `f`'s output every `period_s` seconds until Ctrl-C.
///
/// Installs the process's Ctrl-C handler, which can only happen once; to
/// watch repeatedly, install an [`Interrupt`] yourself and use
/// [`Watch::run`].
pub fn watch<F, T>(period_s: f64, f: F) -> Result<WatchSummary, WatchError>
where
    F: FnMut() -> anyhow::Result<T>,
    T: std::fmt::Display,
{
    let cfg = WatchConfig::builder().period_secs(period_s).build()?;
    let interrupt = Interrupt::install()?;
    debug!("watching on the process terminal");
    Watch::new(cfg, f).run(&mut Tty::new(), &interrupt)
}
