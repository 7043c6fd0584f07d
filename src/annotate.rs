//! The timestamp-overlay pipeline.
//!
//! Strictly linear, one file per invocation:
//!
//! ```text
//! read EXIF ──► image size ──► overlay offset ─┐
//!          └──► capture time ──► overlay text ─┴──► render invocation
//! ```
//!
//! No step is retried or recovered; the first failure aborts the file.
//! The output lands at `<output-directory>/<basename-of-input>`,
//! overwriting any existing file there.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::exif::{self, ExifError};
use crate::fsops::{self, DirError};
use crate::geometry::OverlayOffset;
use crate::render::{AnnotateParams, OverlayStyle, RenderBackend, RenderError};
use crate::timestamp::{self, TimestampParseError};

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("metadata error: {0}")]
    Exif(#[from] ExifError),
    #[error("timestamp error: {0}")]
    Timestamp(#[from] TimestampParseError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("output directory error: {0}")]
    OutputDir(#[from] DirError),
    #[error("input path has no file name: {}", .0.display())]
    NoFileName(PathBuf),
}

/// Burn the EXIF capture time into a copy of `image_path` inside
/// `output_dir`. Returns the path of the rendered copy.
pub fn annotate(
    image_path: &Path,
    output_dir: &Path,
    backend: &dyn RenderBackend,
) -> Result<PathBuf, AnnotateError> {
    let file_name = image_path
        .file_name()
        .ok_or_else(|| AnnotateError::NoFileName(image_path.to_path_buf()))?;

    fsops::ensure_dir(output_dir)?;

    let fields = exif::read_exif(image_path)?;
    let size = fields.image_size()?;
    let capture_time = timestamp::parse_exif_datetime(fields.date_time_original()?)?;

    let text = timestamp::format_overlay_time(&capture_time);
    let offset = OverlayOffset::for_image(size);
    let output = output_dir.join(file_name);

    backend.annotate(&AnnotateParams {
        source: image_path.to_path_buf(),
        output: output.clone(),
        offset: offset.render(),
        text,
        style: OverlayStyle::default(),
    })?;

    Ok(output)
}
