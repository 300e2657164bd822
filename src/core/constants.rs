//! A collection of constants.

/// Column count used when neither `COLUMNS` nor the terminal reports one
pub const FALLBACK_COLS: usize = 80;
/// Row count used when neither `LINES` nor the terminal reports one
pub const FALLBACK_ROWS: usize = 24;

/// Timestamp row plus one blank separator row
pub const HEADER_ROWS: usize = 2;

/// Header timestamp, ISO-8601 local time truncated to milliseconds.
///
/// 2026-10-19T13:50:12.123
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Seconds between frames when the CLI is given no `--interval`
pub const DEFAULT_PERIOD_SECS: f64 = 2.0;

/// Environment variable holding the `tracing` filter directive
pub const LOG_ENV: &str = "TERMWATCH_LOG";
/// Filter used when [`LOG_ENV`] is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";
