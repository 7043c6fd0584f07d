//! Shared test utilities for the photostamp test suite.
//!
//! The central piece is [`ExifJpegBuilder`], which synthesizes a minimal
//! but structurally valid JPEG: SOI, one APP1 segment carrying an
//! `Exif\0\0` TIFF body, EOI. The TIFF body has an IFD0 whose only entry
//! points at an Exif sub-IFD holding the requested tags. Both byte orders
//! are supported so the parser's endianness handling can be exercised.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::ExifJpegBuilder;
//!
//! let bytes = ExifJpegBuilder::new()
//!     .dimensions(3000, 2000)
//!     .date_time_original("2023:01:01 09:00:00")
//!     .build();
//! ```

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TAG_PIXEL_X_DIMENSION: u16 = 0xA002;
const TAG_PIXEL_Y_DIMENSION: u16 = 0xA003;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

/// Builder for synthetic EXIF-bearing JPEG files.
#[derive(Debug, Clone, Default)]
pub struct ExifJpegBuilder {
    dimensions: Option<(u32, u32)>,
    date_time_original: Option<String>,
    big_endian: bool,
    short_dimensions: bool,
}

impl ExifJpegBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set PixelXDimension / PixelYDimension.
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    /// Set DateTimeOriginal to the given raw string (stored verbatim).
    pub fn date_time_original(mut self, raw: &str) -> Self {
        self.date_time_original = Some(raw.to_string());
        self
    }

    /// Emit a big-endian ("MM") TIFF body instead of the default "II".
    pub fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    /// Store the pixel dimensions as SHORT instead of LONG.
    pub fn short_dimensions(mut self) -> Self {
        self.short_dimensions = true;
        self
    }

    /// Produce the full JPEG byte stream.
    pub fn build(&self) -> Vec<u8> {
        let tiff = self.build_tiff();

        let mut jpeg = vec![0xFF, 0xD8]; // SOI
        jpeg.extend_from_slice(&[0xFF, 0xE1]); // APP1
        let seg_len = (2 + 6 + tiff.len()) as u16;
        jpeg.extend_from_slice(&seg_len.to_be_bytes());
        jpeg.extend_from_slice(b"Exif\0\0");
        jpeg.extend_from_slice(&tiff);
        jpeg.extend_from_slice(&[0xFF, 0xD9]); // EOI
        jpeg
    }

    fn build_tiff(&self) -> Vec<u8> {
        let u16_bytes = |v: u16| -> [u8; 2] {
            if self.big_endian {
                v.to_be_bytes()
            } else {
                v.to_le_bytes()
            }
        };
        let u32_bytes = |v: u32| -> [u8; 4] {
            if self.big_endian {
                v.to_be_bytes()
            } else {
                v.to_le_bytes()
            }
        };

        let mut entry_count = 0u16;
        if self.date_time_original.is_some() {
            entry_count += 1;
        }
        if self.dimensions.is_some() {
            entry_count += 2;
        }

        // Layout:
        //   0: header (8 bytes)
        //   8: IFD0 — 1 entry (Exif pointer) + next-IFD offset
        //  26: Exif IFD — entry_count entries + next-IFD offset
        //  then: data area for long ASCII values
        let exif_ifd_offset: u32 = 8 + 2 + 12 + 4;
        let data_offset: u32 = exif_ifd_offset + 2 + u32::from(entry_count) * 12 + 4;

        let mut tiff = Vec::new();
        tiff.extend_from_slice(if self.big_endian { b"MM" } else { b"II" });
        tiff.extend_from_slice(&u16_bytes(42));
        tiff.extend_from_slice(&u32_bytes(8)); // IFD0 offset

        // IFD0: a single Exif sub-IFD pointer
        tiff.extend_from_slice(&u16_bytes(1));
        tiff.extend_from_slice(&u16_bytes(TAG_EXIF_IFD_POINTER));
        tiff.extend_from_slice(&u16_bytes(TYPE_LONG));
        tiff.extend_from_slice(&u32_bytes(1));
        tiff.extend_from_slice(&u32_bytes(exif_ifd_offset));
        tiff.extend_from_slice(&u32_bytes(0)); // no next IFD

        // Exif IFD — entries sorted by tag (0x9003 < 0xA002 < 0xA003)
        tiff.extend_from_slice(&u16_bytes(entry_count));
        let mut data_area: Vec<u8> = Vec::new();

        if let Some(raw) = &self.date_time_original {
            let count = raw.len() as u32 + 1; // include trailing NUL
            tiff.extend_from_slice(&u16_bytes(TAG_DATE_TIME_ORIGINAL));
            tiff.extend_from_slice(&u16_bytes(TYPE_ASCII));
            tiff.extend_from_slice(&u32_bytes(count));
            if count <= 4 {
                let mut inline = [0u8; 4];
                inline[..raw.len()].copy_from_slice(raw.as_bytes());
                tiff.extend_from_slice(&inline);
            } else {
                tiff.extend_from_slice(&u32_bytes(data_offset + data_area.len() as u32));
                data_area.extend_from_slice(raw.as_bytes());
                data_area.push(0);
            }
        }

        if let Some((width, height)) = self.dimensions {
            for (tag, value) in [
                (TAG_PIXEL_X_DIMENSION, width),
                (TAG_PIXEL_Y_DIMENSION, height),
            ] {
                tiff.extend_from_slice(&u16_bytes(tag));
                if self.short_dimensions {
                    tiff.extend_from_slice(&u16_bytes(TYPE_SHORT));
                    tiff.extend_from_slice(&u32_bytes(1));
                    // SHORT occupies the first two bytes of the value field
                    tiff.extend_from_slice(&u16_bytes(value as u16));
                    tiff.extend_from_slice(&u16_bytes(0));
                } else {
                    tiff.extend_from_slice(&u16_bytes(TYPE_LONG));
                    tiff.extend_from_slice(&u32_bytes(1));
                    tiff.extend_from_slice(&u32_bytes(value));
                }
            }
        }

        tiff.extend_from_slice(&u32_bytes(0)); // no next IFD
        tiff.extend_from_slice(&data_area);
        tiff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_soi_and_eoi() {
        let bytes = ExifJpegBuilder::new().dimensions(100, 100).build();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn builder_embeds_exif_header() {
        let bytes = ExifJpegBuilder::new().dimensions(100, 100).build();
        assert!(bytes.windows(6).any(|w| w == b"Exif\0\0"));
    }
}
