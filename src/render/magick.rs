//! ImageMagick backend — shells out to `convert`.
//!
//! Requires ImageMagick on `PATH`. Argument order matters: the styling
//! flags and the first `-density` apply to the `-annotate` draw; the
//! second `-density` plus `-type` and `-quality` apply to the output
//! re-encode. The destination path comes last.

use super::backend::{RenderBackend, RenderError};
use super::params::AnnotateParams;
use std::ffi::OsString;
use std::process::Command;

const CONVERT_BIN: &str = "convert";

/// Production backend delegating to the ImageMagick `convert` tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagickBackend;

impl MagickBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for MagickBackend {
    fn annotate(&self, params: &AnnotateParams) -> Result<(), RenderError> {
        let output = Command::new(CONVERT_BIN)
            .args(build_annotate_args(params))
            .output()
            .map_err(|err| RenderError {
                path: params.source.clone(),
                reason: format!("could not run {CONVERT_BIN}: {err}"),
            })?;

        if !output.status.success() {
            return Err(RenderError {
                path: params.source.clone(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Build the `convert` argument list for an annotate invocation.
fn build_annotate_args(params: &AnnotateParams) -> Vec<OsString> {
    let style = &params.style;
    let mut args: Vec<OsString> = vec![params.source.clone().into()];

    for (flag, value) in [
        ("-virtual-pixel", style.virtual_pixel.as_str()),
        ("-font", style.font.as_str()),
        ("-undercolor", style.undercolor.as_str()),
        ("-gravity", style.gravity.as_str()),
        ("-fill", style.fill.as_str()),
    ] {
        args.push(flag.into());
        args.push(value.into());
    }

    args.push("-density".into());
    args.push(style.annotate_density.to_string().into());
    args.push("-pointsize".into());
    args.push(style.pointsize.to_string().into());
    args.push("-annotate".into());
    args.push(params.offset.clone().into());
    args.push(params.text.clone().into());

    args.push("-density".into());
    args.push(style.output_density.to_string().into());
    args.push("-type".into());
    args.push(style.color_type.clone().into());
    args.push("-quality".into());
    args.push(style.quality.value().to_string().into());

    args.push(params.output.clone().into());
    args
}
