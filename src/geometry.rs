//! Pure calculation functions for overlay placement.
//!
//! The overlay sits a fixed percentage in from the anchor corner
//! (ImageMagick gravity `SouthWest`): 2% of the width horizontally, 3% of
//! the height vertically, truncated to whole pixels. Offsets serialize to
//! ImageMagick's geometry argument form, `<origin><signed-x><signed-y>`.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::exif::ImageSize;

/// Geometry origin passed to `-annotate`. The offset is interpreted
/// against the gravity corner, so the origin itself stays at `0x0`.
pub const ANNOTATE_ORIGIN: &str = "0x0";

const X_MARGIN_PERCENT: u64 = 2;
const Y_MARGIN_PERCENT: u64 = 3;

/// A pixel offset from the anchor corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOffset {
    pub origin: &'static str,
    pub x: i32,
    pub y: i32,
}

impl OverlayOffset {
    /// Compute the overlay offset for an image: `width * 2 / 100` pixels
    /// horizontally, `height * 3 / 100` vertically (integer truncation).
    pub fn for_image(size: ImageSize) -> Self {
        Self {
            origin: ANNOTATE_ORIGIN,
            x: (u64::from(size.width) * X_MARGIN_PERCENT / 100) as i32,
            y: (u64::from(size.height) * Y_MARGIN_PERCENT / 100) as i32,
        }
    }

    /// Serialize to the form the render tool consumes, e.g. `"0x0+60+60"`.
    pub fn render(&self) -> String {
        offset_string(self.origin, self.x, self.y)
    }
}

/// Render a number with an explicit sign: zero and positive values get
/// `+`, negative values keep their `-`.
pub fn signed_number(number: i32) -> String {
    let sign = if number < 0 { "" } else { "+" };
    format!("{sign}{number}")
}

/// Join an origin and two signed offsets into a single geometry string.
pub fn offset_string(origin: &str, x_offset: i32, y_offset: i32) -> String {
    format!(
        "{origin}{}{}",
        signed_number(x_offset),
        signed_number(y_offset)
    )
}
