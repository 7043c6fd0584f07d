//! Minimal EXIF reader for JPEG files.
//!
//! Extracts the three fields the annotate pipeline needs:
//! - PixelXDimension (`0xA002`) and PixelYDimension (`0xA003`) — image size
//! - DateTimeOriginal (`0x9003`) — capture time, `YYYY:MM:DD HH:MM:SS`
//!
//! For JPEG: reads from the APP1 marker (`Exif\0\0` header), then walks the
//! embedded TIFF structure — IFD0 for the Exif sub-IFD pointer (`0x8769`),
//! then the sub-IFD for the tags above. Camera writers occasionally place
//! capture tags directly in IFD0, so both IFDs are scanned.
//!
//! Zero external dependencies — pure Rust, ~200 lines.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExifError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no parseable EXIF metadata in {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: &'static str },
    #[error("required EXIF field {field} is missing")]
    MissingField { field: &'static str },
}

/// Pixel dimensions read from EXIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Raw field values as found in the file. Absent tags stay `None`; the
/// typed accessors below turn absence into [`ExifError::MissingField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExifFields {
    pub pixel_x_dimension: Option<u32>,
    pub pixel_y_dimension: Option<u32>,
    pub date_time_original: Option<String>,
}

impl ExifFields {
    /// Image dimensions, requiring both pixel-dimension tags.
    pub fn image_size(&self) -> Result<ImageSize, ExifError> {
        let width = self.pixel_x_dimension.ok_or(ExifError::MissingField {
            field: "PixelXDimension",
        })?;
        let height = self.pixel_y_dimension.ok_or(ExifError::MissingField {
            field: "PixelYDimension",
        })?;
        Ok(ImageSize { width, height })
    }

    /// Raw capture-time string, requiring the DateTimeOriginal tag.
    pub fn date_time_original(&self) -> Result<&str, ExifError> {
        self.date_time_original
            .as_deref()
            .ok_or(ExifError::MissingField {
                field: "DateTimeOriginal",
            })
    }
}

/// Read the EXIF fields from a JPEG file.
///
/// Fails with [`ExifError::Io`] when the file cannot be read and
/// [`ExifError::Unreadable`] when it is not a JPEG or carries no Exif
/// APP1 segment. Absent individual tags are not an error here — they
/// surface through the accessors on [`ExifFields`].
pub fn read_exif(path: &Path) -> Result<ExifFields, ExifError> {
    let bytes = std::fs::read(path).map_err(|source| ExifError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tiff = exif_payload(&bytes).map_err(|reason| ExifError::Unreadable {
        path: path.to_path_buf(),
        reason,
    })?;

    parse_exif_tiff(tiff).ok_or(ExifError::Unreadable {
        path: path.to_path_buf(),
        reason: "malformed TIFF structure",
    })
}

// ---------------------------------------------------------------------------
// JPEG: locate the APP1 Exif segment
// ---------------------------------------------------------------------------

const EXIF_HEADER: &[u8] = b"Exif\0\0";

/// Walk the JPEG marker stream and return the TIFF payload of the first
/// APP1 segment carrying an `Exif\0\0` header.
fn exif_payload(data: &[u8]) -> Result<&[u8], &'static str> {
    if data.len() < 2 || data[0..2] != [0xFF, 0xD8] {
        return Err("not a JPEG file");
    }

    let mut pos = 2;
    while pos + 2 <= data.len() {
        if data[pos] != 0xFF {
            return Err("corrupt JPEG marker stream");
        }
        let marker = data[pos + 1];

        // Standalone markers carry no length field
        if marker == 0xD8 || marker == 0xD9 || marker == 0x01 || (0xD0..=0xD7).contains(&marker) {
            pos += 2;
            continue;
        }
        // SOS starts entropy-coded data; APP segments must precede it
        if marker == 0xDA {
            break;
        }
        if pos + 4 > data.len() {
            break;
        }

        let seg_len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        if seg_len < 2 {
            return Err("corrupt JPEG marker stream");
        }
        let seg_start = pos + 4;
        let seg_end = (pos + 2 + seg_len).min(data.len());

        if marker == 0xE1 {
            if let Some(tiff) = data[seg_start..seg_end].strip_prefix(EXIF_HEADER) {
                return Ok(tiff);
            }
        }

        pos += 2 + seg_len;
    }

    Err("no Exif APP1 segment")
}

// ---------------------------------------------------------------------------
// TIFF: walk IFDs for the wanted tags
// ---------------------------------------------------------------------------

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TAG_PIXEL_X_DIMENSION: u16 = 0xA002;
const TAG_PIXEL_Y_DIMENSION: u16 = 0xA003;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

/// Parse the TIFF body of an Exif segment. Returns `None` only for a
/// structurally broken header — an intact TIFF with none of the wanted
/// tags yields empty fields.
fn parse_exif_tiff(tiff: &[u8]) -> Option<ExifFields> {
    if tiff.len() < 8 {
        return None;
    }

    // Determine byte order
    let big_endian = match &tiff[0..2] {
        b"MM" => true,
        b"II" => false,
        _ => return None,
    };

    // Verify TIFF magic (42)
    if read_u16_at(tiff, big_endian, 2)? != 42 {
        return None;
    }

    let ifd0_offset = read_u32_at(tiff, big_endian, 4)? as usize;

    let mut fields = ExifFields::default();
    let exif_ifd = scan_ifd(tiff, big_endian, ifd0_offset, &mut fields);
    if let Some(offset) = exif_ifd {
        scan_ifd(tiff, big_endian, offset, &mut fields);
    }
    Some(fields)
}

/// Walk a single IFD, recording wanted tags into `fields`.
///
/// Returns the Exif sub-IFD offset if the pointer tag is present. A
/// truncated entry table stops the scan but keeps anything already found.
fn scan_ifd(
    tiff: &[u8],
    big_endian: bool,
    ifd_offset: usize,
    fields: &mut ExifFields,
) -> Option<usize> {
    let entry_count = read_u16_at(tiff, big_endian, ifd_offset)? as usize;
    let entries_start = ifd_offset + 2;
    let mut exif_ifd = None;

    for i in 0..entry_count {
        // Each entry: tag (2) + type (2) + count (4) + value-or-offset (4)
        let entry = entries_start + i * 12;
        let tag = read_u16_at(tiff, big_endian, entry)?;
        let typ = read_u16_at(tiff, big_endian, entry + 2)?;
        let count = read_u32_at(tiff, big_endian, entry + 4)? as usize;
        let value_field = entry + 8;

        match tag {
            TAG_EXIF_IFD_POINTER if typ == TYPE_LONG => {
                exif_ifd = Some(read_u32_at(tiff, big_endian, value_field)? as usize);
            }
            TAG_PIXEL_X_DIMENSION => {
                fields.pixel_x_dimension = read_unsigned(tiff, big_endian, typ, value_field);
            }
            TAG_PIXEL_Y_DIMENSION => {
                fields.pixel_y_dimension = read_unsigned(tiff, big_endian, typ, value_field);
            }
            TAG_DATE_TIME_ORIGINAL if typ == TYPE_ASCII => {
                fields.date_time_original = read_ascii(tiff, big_endian, count, value_field);
            }
            _ => {}
        }
    }

    exif_ifd
}

/// Read a single SHORT or LONG value. Count-1 values of both types are
/// stored inline in the entry's value field; SHORT occupies its first
/// two bytes.
fn read_unsigned(tiff: &[u8], big_endian: bool, typ: u16, value_field: usize) -> Option<u32> {
    match typ {
        TYPE_SHORT => read_u16_at(tiff, big_endian, value_field).map(u32::from),
        TYPE_LONG => read_u32_at(tiff, big_endian, value_field),
        _ => None,
    }
}

/// Read an ASCII value. Values longer than four bytes live at an offset
/// elsewhere in the TIFF body; shorter ones are inline. The count includes
/// the trailing NUL. Empty strings are treated as absent.
fn read_ascii(tiff: &[u8], big_endian: bool, count: usize, value_field: usize) -> Option<String> {
    let bytes = if count <= 4 {
        tiff.get(value_field..value_field + count)?
    } else {
        let offset = read_u32_at(tiff, big_endian, value_field)? as usize;
        tiff.get(offset..offset + count)?
    };

    let text = String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .trim()
        .to_string();
    (!text.is_empty()).then_some(text)
}

fn read_u16_at(data: &[u8], big_endian: bool, offset: usize) -> Option<u16> {
    let bytes: [u8; 2] = data.get(offset..offset + 2)?.try_into().ok()?;
    Some(if big_endian {
        u16::from_be_bytes(bytes)
    } else {
        u16::from_le_bytes(bytes)
    })
}

fn read_u32_at(data: &[u8], big_endian: bool, offset: usize) -> Option<u32> {
    let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
    Some(if big_endian {
        u32::from_be_bytes(bytes)
    } else {
        u32::from_le_bytes(bytes)
    })
}
