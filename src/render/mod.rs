pub mod frame;

pub use frame::{Frame, Renderer, move_to};

use chrono::Local;

use crate::core::constants::TIMESTAMP_FORMAT;

/// Local wall-clock time for the frame header, millisecond precision.
#[must_use]
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
