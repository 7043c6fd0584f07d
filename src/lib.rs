//! # Photostamp
//!
//! Command-line utilities for a personal photo workflow: burn the EXIF
//! capture time into a copy of a photo, and renumber a shoot into a clean
//! prefixed sequence of symlinks.
//!
//! # Architecture: One Linear Pipeline per Command
//!
//! `annotate` runs a strictly linear flow with no retries, branching, or
//! cross-run state:
//!
//! ```text
//! 1. Read      EXIF fields from the JPEG       (exif)
//! 2. Compute   overlay text + pixel offset     (timestamp, geometry)
//! 3. Render    via ImageMagick `convert`       (render)
//! ```
//!
//! `renumber` is pure enumeration: list, sort, symlink.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`exif`] | Minimal EXIF parser — JPEG APP1 segment walk + TIFF IFD scan, typed accessors per required field |
//! | [`timestamp`] | Capture-time parsing (`YYYY:MM:DD HH:MM:SS`) and 12-hour overlay formatting |
//! | [`geometry`] | Overlay placement math — percentage margins, signed-offset geometry strings |
//! | [`render`] | External-tool boundary — parameter types, backend trait, ImageMagick implementation |
//! | [`annotate`] | The overlay pipeline tying the above together |
//! | [`renumber`] | Prefixed symlink sequences with a relative-target policy |
//! | [`fsops`] | Output-directory creation with conflict detection |
//!
//! # Design Decisions
//!
//! ## Hand-Rolled EXIF Parsing
//!
//! The [`exif`] module reads the three tags this tool needs directly from
//! the APP1 TIFF structure instead of pulling in a full EXIF library.
//! The parser is ~200 lines, pure, and rejects absent or empty tags
//! explicitly — a missing DateTimeOriginal is a loud, typed error, never
//! a silently propagated empty string.
//!
//! ## ImageMagick Behind a Trait
//!
//! Text rendering quality (font hinting, subpixel placement, density
//! handling) is exactly what ImageMagick is good at, so the actual pixel
//! work stays external. The [`render::RenderBackend`] trait keeps the
//! pipeline testable without the tool installed; the production backend
//! shells out to `convert` and treats it as a black box that either
//! produces the output file or fails.
//!
//! ## Relative Symlink Targets
//!
//! The renumber command always writes link targets relative to the output
//! directory. Earlier iterations of this workflow mixed relative and raw
//! glob paths; one documented policy replaces both (see [`renumber`]).

pub mod annotate;
pub mod exif;
pub mod fsops;
pub mod geometry;
pub mod render;
pub mod renumber;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod test_helpers;
