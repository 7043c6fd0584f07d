//! Render backend trait and error type.
//!
//! The production implementation is
//! [`MagickBackend`](super::magick::MagickBackend), which shells out to
//! ImageMagick. The tool is a black box: it accepts the parameter set and
//! either produces the output file or fails. Any failure it surfaces is
//! reported through [`RenderError`] with the source path attached.

use super::params::AnnotateParams;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("render failed for {}: {reason}", .path.display())]
pub struct RenderError {
    /// Source image the invocation was processing.
    pub path: PathBuf,
    pub reason: String,
}

/// Trait for render backends.
pub trait RenderBackend {
    /// Burn the overlay text into a copy of the source image at the
    /// destination path, overwriting any existing file there.
    fn annotate(&self, params: &AnnotateParams) -> Result<(), RenderError>;
}
