//! Parameter types for render operations.
//!
//! These structs describe *what* to draw, not *how* to draw it. They are
//! the interface between the annotate pipeline (which computes text and
//! geometry) and the backend (which runs the external tool). This
//! separation allows swapping backends (e.g. for testing with a mock)
//! without changing pipeline logic.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Fixed styling for the timestamp overlay.
///
/// The defaults were lifted from the LR Mogrify plugin's export preset.
/// It's possible they could be better tuned — nothing downstream depends
/// on the specific values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Edge handling for pixels sampled outside the canvas.
    pub virtual_pixel: String,
    pub font: String,
    /// Text background; fully transparent by default.
    pub undercolor: String,
    /// Anchor corner the offset is measured from.
    pub gravity: String,
    pub fill: String,
    /// Density in effect while the text is drawn.
    pub annotate_density: u32,
    pub pointsize: u32,
    /// Density re-applied to the output file after drawing.
    pub output_density: u32,
    pub color_type: String,
    pub quality: Quality,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            virtual_pixel: "mirror".to_string(),
            font: "/System/Library/Fonts/Monaco.dfont".to_string(),
            undercolor: "rgba(0, 0, 0, 0.0)".to_string(),
            gravity: "SouthWest".to_string(),
            fill: "rgba(92.86%, 94.04%, 94.01%, 1.00)".to_string(),
            annotate_density: 72,
            pointsize: 108,
            output_density: 240,
            color_type: "TrueColor".to_string(),
            quality: Quality::default(),
        }
    }
}

/// Full specification for one annotate invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Geometry string, e.g. `"0x0+60+60"`.
    pub offset: String,
    /// Overlay text, e.g. `" 3:05:09 PM"`.
    pub text: String,
    pub style: OverlayStyle,
}
