//! Aggregates the pure / platform-neutral layer.

pub mod command;
pub mod config;
pub mod constants;
pub mod duration;
pub mod error;
pub mod geometry;
pub mod sample;
pub mod timing;

// re-export frequently-used items for convenience
pub use command::{CommandSampler, shell};
pub use config::{WatchConfig, WatchConfigBuilder};
pub use duration::{Seconds, format_duration};
pub use error::{ConfigError, WatchError};
pub use geometry::{TermSize, terminal_geometry};
pub use sample::{Sample, Sampler};
pub use timing::{elapsed_label, timed, timed_format, timed_print};
