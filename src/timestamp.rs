//! Capture-time parsing and overlay text formatting.
//!
//! EXIF stores DateTimeOriginal as `YYYY:MM:DD HH:MM:SS` with no timezone;
//! the value is treated as naive local time and never converted. The overlay
//! renders the time-of-day portion on a 12-hour clock.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The exact EXIF date/time layout. Anything that deviates is a fatal
/// input error.
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not parse date/time found: {raw}")]
pub struct TimestampParseError {
    pub raw: String,
}

/// Parse a raw EXIF capture-time string.
pub fn parse_exif_datetime(raw: &str) -> Result<NaiveDateTime, TimestampParseError> {
    NaiveDateTime::parse_from_str(raw, EXIF_DATETIME_FORMAT).map_err(|_| TimestampParseError {
        raw: raw.to_string(),
    })
}

/// Render a capture time as overlay text: `" H:MM:SS AM/PM"`.
///
/// `%l` is the 12-hour hour, space padded — 15:05:09 renders as
/// `" 3:05:09 PM"` with no leading zero.
pub fn format_overlay_time(datetime: &NaiveDateTime) -> String {
    datetime.format("%l:%M:%S %p").to_string()
}
