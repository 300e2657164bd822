//! Public-facing crate root – re-exports + the one-shot `watch` helper.
//!
//! ```no_run
//! let mut n = 0;
//! termwatch::watch(0.5, || {
//!     n += 1;
//!     Ok::<_, anyhow::Error>(format!("tick {n}"))
//! })?;
//! # Ok::<(), termwatch::WatchError>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;
pub mod term;
pub mod watch;

pub use crate::core::{
    command::{CommandSampler, shell},
    config::{WatchConfig, WatchConfigBuilder},
    duration::{Seconds, format_duration},
    error::{ConfigError, WatchError},
    geometry::{TermSize, terminal_geometry},
    sample::{Sample, Sampler},
    timing::{elapsed_label, timed, timed_format, timed_print},
};

pub use render::{Frame, Renderer};
pub use term::{Cancellation, Interrupt, RawMode, Terminal, Tty};
pub use watch::{StopReason, Watch, WatchSummary, watch};
