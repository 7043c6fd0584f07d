//! Render invocation — the external image-tool boundary.
//!
//! Burning text into a photo is delegated to ImageMagick; the rest of the
//! crate only ever sees the [`RenderBackend`] trait and a parameter struct:
//!
//! | Piece | Role |
//! |---|---|
//! | [`AnnotateParams`] / [`OverlayStyle`] | *What* to draw — paths, text, offset, fixed styling |
//! | [`RenderBackend`] | Seam between pipeline and tool; mockable in tests |
//! | [`MagickBackend`] | Production implementation shelling out to `convert` |

pub mod backend;
pub mod magick;
mod params;

pub use backend::{RenderBackend, RenderError};
pub use magick::MagickBackend;
pub use params::{AnnotateParams, OverlayStyle, Quality};
