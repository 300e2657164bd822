//! Run-time configuration object + fluent builder.

use std::time::Duration;

use crate::core::{constants::DEFAULT_PERIOD_SECS, error::ConfigError};

/// Immutable parameters handed to the watch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Pause between the end of one frame and the start of the next.
    pub period: Duration,
    /// Stop normally after this many frames; `None` runs until interrupted.
    pub max_frames: Option<u64>,
}

impl WatchConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> WatchConfigBuilder {
        WatchConfigBuilder::default()
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs_f64(DEFAULT_PERIOD_SECS),
            max_frames: None,
        }
    }
}

/// Fluent builder; validation is deferred to `build`.
#[derive(Debug, Default)]
pub struct WatchConfigBuilder {
    period_secs: Option<f64>,
    period: Option<Duration>,
    max_frames: Option<u64>,
}

impl WatchConfigBuilder {
    /// Period in (possibly fractional) seconds, checked in `build`.
    #[inline]
    #[must_use]
    pub fn period_secs(mut self, secs: f64) -> Self {
        self.period_secs = Some(secs);
        self.period = None;
        self
    }
    #[inline]
    #[must_use]
    pub fn period(mut self, d: Duration) -> Self {
        self.period = Some(d);
        self.period_secs = None;
        self
    }
    #[inline]
    #[must_use]
    pub fn max_frames(mut self, n: u64) -> Self {
        self.max_frames = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_frames_opt(mut self, n: Option<u64>) -> Self {
        self.max_frames = n;
        self
    }

    pub fn build(self) -> Result<WatchConfig, ConfigError> {
        let period = match (self.period, self.period_secs) {
            (Some(d), _) => d,
            (None, Some(secs)) => {
                Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidPeriod(secs))?
            }
            (None, None) => WatchConfig::default().period,
        };
        if self.max_frames == Some(0) {
            return Err(ConfigError::ZeroFrameLimit);
        }
        Ok(WatchConfig {
            period,
            max_frames: self.max_frames,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<WatchConfigBuilder> for Result<WatchConfig, ConfigError> {
    fn from(b: WatchConfigBuilder) -> Self {
        b.build()
    }
}
