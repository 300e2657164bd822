//! Ctrl-C as an explicit handle instead of a process-wide flag.

use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::Duration,
};

use tracing::debug;

use crate::core::error::WatchError;

/// Tells the watch loop when to stop.
///
/// Checked at the top of every iteration and awaited between frames.
pub trait Cancellation {
    /// Forget cancellations that arrived before a watch started.
    fn clear(&self) {}

    /// Non-blocking check.
    fn is_cancelled(&self) -> bool;

    /// Block for up to `period`; `true` if cancelled meanwhile.
    fn wait(&self, period: Duration) -> bool;
}

/// Ctrl-C delivered over a channel.
///
/// The underlying handler can be registered once per process, so create
/// one `Interrupt` and reuse it across watches.
pub struct Interrupt {
    rx: Receiver<()>,
}

impl Interrupt {
    pub fn install() -> Result<Self, WatchError> {
        let (tx, rx) = mpsc::channel();
        ctrlc::set_handler(move || {
            let _ = tx.send(());
        })?;
        debug!("Ctrl-C handler installed");
        Ok(Self { rx })
    }
}

impl Cancellation for Interrupt {
    fn clear(&self) {
        while self.rx.try_recv().is_ok() {}
    }

    fn is_cancelled(&self) -> bool {
        self.rx.try_recv().is_ok()
    }

    fn wait(&self, period: Duration) -> bool {
        match self.rx.recv_timeout(period) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) => false,
            // handler gone; nothing can cancel any more, keep the cadence
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(period);
                false
            }
        }
    }
}
