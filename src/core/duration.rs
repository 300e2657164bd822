//! `H:MM:SS[.mmm]` rendering of elapsed seconds.
//!
//! Whether the millisecond suffix is printed depends on how the value was
//! handed in, not on its magnitude: `0` prints `00:00`, `0.0` prints
//! `00:00.000`. [`Seconds`] carries that distinction.

use std::{fmt, str::FromStr, time::Duration};

use crate::core::error::ConfigError;

/// A count of seconds that remembers whether it was whole or fractional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Seconds {
    Whole(i128),
    Fractional(f64),
}

macro_rules! whole_from {
    ($($t:ty),*) => {$(
        impl From<$t> for Seconds {
            #[inline]
            fn from(n: $t) -> Self {
                Self::Whole(i128::from(n))
            }
        }
    )*};
}
whole_from!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for Seconds {
    #[inline]
    fn from(n: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Self::Whole(i128::try_from(n).unwrap_or(i128::MAX))
    }
}

impl From<isize> for Seconds {
    #[inline]
    fn from(n: isize) -> Self {
        Self::Whole(i128::try_from(n).unwrap_or(i128::MAX))
    }
}

impl From<f64> for Seconds {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Fractional(x)
    }
}

impl From<f32> for Seconds {
    #[inline]
    fn from(x: f32) -> Self {
        Self::Fractional(f64::from(x))
    }
}

/// Measured time is always fractional.
impl From<Duration> for Seconds {
    #[inline]
    fn from(d: Duration) -> Self {
        Self::Fractional(d.as_secs_f64())
    }
}

/// `"100"` parses whole, `"0.5"` / `"1e3"` parse fractional.
impl FromStr for Seconds {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.trim().as_bytes();
        if let Ok(n) = lexical_core::parse::<i128>(b) {
            return Ok(Self::Whole(n));
        }
        lexical_core::parse::<f64>(b)
            .map(Self::Fractional)
            .map_err(|_| ConfigError::BadSeconds(s.to_owned()))
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Whole(n) => {
                if n < 0 {
                    f.write_str("-")?;
                }
                write_whole(f, n.unsigned_abs())
            }
            Self::Fractional(x) => write_fractional(f, x),
        }
    }
}

/// 2^128; every float below it truncates to a `u128` exactly.
const U128_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn write_whole(f: &mut fmt::Formatter<'_>, secs: u128) -> fmt::Result {
    let s = (secs % 60) as u8;
    let m = (secs / 60 % 60) as u8;
    write_clock(f, (secs / 3600) as f64, m, s)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn write_fractional(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if !x.is_finite() {
        return write!(f, "{x}");
    }
    if x < 0.0 {
        f.write_str("-")?;
        return write_fractional(f, -x);
    }

    if x < U128_LIMIT {
        write_whole(f, x.trunc() as u128)?;
    } else {
        // integral at this magnitude; fmod is exact
        let s = (x % 60.0) as u8;
        let m = ((x % 3600.0) / 60.0).floor() as u8;
        write_clock(f, (x / 3600.0).floor(), m, s)?;
    }

    // correctly rounded; a remainder that rounds up to 1.000 prints .000
    let frac = format!("{:.3}", x.fract());
    match frac.split_once('.') {
        Some((_, ms)) => write!(f, ".{ms}"),
        None => f.write_str(".000"),
    }
}

/// Hours go out through float formatting, so past 2^53 they round to the
/// nearest representable `f64`.
fn write_clock(f: &mut fmt::Formatter<'_>, h: f64, m: u8, s: u8) -> fmt::Result {
    if h < 1.0 {
        write!(f, "{m:02}:{s:02}")
    } else {
        write!(f, "{h:02.0}:{m:02}:{s:02}")
    }
}

/// Render elapsed seconds as `MM:SS`, `HH:MM:SS`, plus `.mmm` for
/// fractional inputs.
///
/// ```
/// use termwatch::format_duration;
///
/// assert_eq!(format_duration(100), "01:40");
/// assert_eq!(format_duration(1_000_000), "277:46:40");
/// assert_eq!(format_duration(12345.6789), "03:25:45.679");
/// assert_eq!(format_duration(-1), "-00:01");
/// ```
#[must_use]
pub fn format_duration(secs: impl Into<Seconds>) -> String {
    secs.into().to_string()
}
