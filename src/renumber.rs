//! Sequence renumbering — symlinks a directory of JPEGs into a
//! zero-padded, prefixed sequence.
//!
//! Given an input directory with `DSC_0042.JPG`, `DSC_0107.JPG`,
//! `DSC_0113.JPG` and the prefix `trip`, the output directory gets
//! `trip0.JPG`, `trip1.JPG`, `trip2.JPG` — symlinks, not copies, so a
//! renumbered set costs nothing and the originals stay untouched. The
//! pad width grows with the file count (10+ files → `trip00` …).
//!
//! ## Symlink target policy
//!
//! Targets are always written **relative to the output directory**
//! (`../input/DSC_0042.JPG`), never as the raw input path. Relative links
//! survive moving the parent tree as a whole and never leak an absolute
//! home-directory path into a set that may get rsynced elsewhere.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::fsops::{self, DirError};

#[derive(Error, Debug)]
pub enum RenumberError {
    #[error("output directory error: {0}")]
    OutputDir(#[from] DirError),
    #[error("cannot list input directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One created link: where it points and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenumberedLink {
    pub source: PathBuf,
    pub link: PathBuf,
}

/// Renumber every JPEG in `input_dir` (non-recursive, sorted by file
/// name) into a prefixed symlink sequence under `output_dir`.
pub fn renumber(
    input_dir: &Path,
    prefix: &str,
    output_dir: &Path,
) -> Result<Vec<RenumberedLink>, RenumberError> {
    fsops::ensure_dir(output_dir)?;

    let files = list_jpegs(input_dir)?;
    let digits = files.len().to_string().len();

    let mut links = Vec::with_capacity(files.len());
    for (index, source) in files.into_iter().enumerate() {
        // Extension is known UTF-8: list_jpegs only admits jpg/jpeg
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("JPG");
        let link = output_dir.join(format!("{prefix}{index:0digits$}.{ext}"));

        symlink(&relative_to(&source, output_dir), &link)?;
        links.push(RenumberedLink { source, link });
    }

    Ok(links)
}

/// Files with a `jpg`/`jpeg` extension (any case) directly inside `dir`,
/// sorted by file name.
fn list_jpegs(dir: &Path) -> Result<Vec<PathBuf>, RenumberError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() && has_jpeg_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn has_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Re-express `target` relative to `base`. Neither path needs to exist.
/// When one side is absolute and the other is not there is no common
/// root, so the target is returned as-is.
fn relative_to(target: &Path, base: &Path) -> PathBuf {
    if target.is_absolute() != base.is_absolute() {
        return target.to_path_buf();
    }

    let target_comps: Vec<Component> = target.components().collect();
    let base_comps: Vec<Component> = base.components().collect();
    let common = target_comps
        .iter()
        .zip(&base_comps)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_comps.len() {
        relative.push("..");
    }
    for comp in &target_comps[common..] {
        relative.push(comp);
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
