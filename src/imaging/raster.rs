//! Pure Rust image processor backed by the `image` crate.
//!
//! Works entirely on in-memory byte buffers; the bookmark flow hands us the
//! contents of one user-selected file at a time and stores the result as a
//! string, so nothing here ever writes to disk.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Format sniffing | `image::guess_format` |
//! | Decode (JPEG, PNG, GIF, BMP, WebP) | `image` crate (pure Rust decoders) |
//! | Identify | `ImageReader::into_dimensions` (header read, no full decode) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::params::TranscodeParams;
use super::processor::{CodecError, Dimensions, ImageProcessor};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// Sniff the MIME type of encoded image bytes from their magic numbers.
///
/// Bytes that match no compiled-in format are a decode failure; callers never
/// get a guessed or fallback MIME.
pub fn sniff_mime(bytes: &[u8]) -> Result<&'static str, CodecError> {
    let format = image::guess_format(bytes)
        .map_err(|e| CodecError::Decode(format!("unrecognized image format: {}", e)))?;
    Ok(format.to_mime_type())
}

/// Pure Rust processor using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RasterProcessor;

impl RasterProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RasterProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode encoded bytes into a bitmap, sniffing the format from the bytes.
fn decode_image(bytes: &[u8]) -> Result<DynamicImage, CodecError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(CodecError::Io)?
        .decode()
        .map_err(|e| CodecError::Decode(format!("failed to decode image: {}", e)))
}

impl ImageProcessor for RasterProcessor {
    fn identify(&self, bytes: &[u8]) -> Result<Dimensions, CodecError> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(CodecError::Io)?
            .into_dimensions()
            .map_err(|e| CodecError::Decode(format!("failed to read dimensions: {}", e)))?;
        Ok(Dimensions { width, height })
    }

    fn transcode(&self, bytes: &[u8], params: &TranscodeParams) -> Result<Vec<u8>, CodecError> {
        let img = decode_image(bytes)?;

        let scaled = if (img.width(), img.height()) == (params.width, params.height) {
            img
        } else {
            img.resize_exact(params.width, params.height, FilterType::Lanczos3)
        };

        let mut out = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
            &mut out,
            params.quality.value() as u8,
        );
        scaled
            .write_with_encoder(encoder)
            .map_err(|e| CodecError::Encode(format!("JPEG encode failed: {}", e)))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::Quality;
    use image::{ImageEncoder, RgbImage};

    /// Create valid JPEG bytes with the given dimensions.
    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut bytes = Vec::new();
        image::codecs::jpeg::JpegEncoder::new(&mut bytes)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
        bytes
    }

    /// Create valid PNG bytes with the given dimensions.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
        });
        let mut cursor = Cursor::new(Vec::new());
        img.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
        cursor.into_inner()
    }

    // =========================================================================
    // sniff_mime tests
    // =========================================================================

    #[test]
    fn sniff_mime_recognizes_jpeg() {
        assert_eq!(sniff_mime(&jpeg_bytes(10, 10)).unwrap(), "image/jpeg");
    }

    #[test]
    fn sniff_mime_recognizes_png() {
        assert_eq!(sniff_mime(&png_bytes(10, 10)).unwrap(), "image/png");
    }

    #[test]
    fn sniff_mime_rejects_garbage() {
        let result = sniff_mime(b"definitely not an image");
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    // =========================================================================
    // identify tests
    // =========================================================================

    #[test]
    fn identify_jpeg_dimensions() {
        let processor = RasterProcessor::new();
        let dims = processor.identify(&jpeg_bytes(200, 150)).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_png_dimensions() {
        let processor = RasterProcessor::new();
        let dims = processor.identify(&png_bytes(64, 48)).unwrap();
        assert_eq!(dims.width, 64);
        assert_eq!(dims.height, 48);
    }

    #[test]
    fn identify_garbage_errors() {
        let processor = RasterProcessor::new();
        let result = processor.identify(b"definitely not an image");
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    // =========================================================================
    // transcode tests
    // =========================================================================

    #[test]
    fn transcode_downscales_to_target() {
        let processor = RasterProcessor::new();
        let out = processor
            .transcode(
                &jpeg_bytes(400, 300),
                &TranscodeParams {
                    width: 200,
                    height: 150,
                    quality: Quality::new(70),
                },
            )
            .unwrap();

        // SOI marker: output really is JPEG
        assert_eq!(&out[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 150);
    }

    #[test]
    fn transcode_same_size_still_reencodes_as_jpeg() {
        let processor = RasterProcessor::new();
        let out = processor
            .transcode(
                &png_bytes(100, 80),
                &TranscodeParams {
                    width: 100,
                    height: 80,
                    quality: Quality::new(70),
                },
            )
            .unwrap();

        assert_eq!(image::guess_format(&out).unwrap(), image::ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(decoded.width(), 100);
        assert_eq!(decoded.height(), 80);
    }

    #[test]
    fn transcode_garbage_errors() {
        let processor = RasterProcessor::new();
        let result = processor.transcode(
            b"definitely not an image",
            &TranscodeParams {
                width: 100,
                height: 100,
                quality: Quality::default(),
            },
        );
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn transcode_empty_input_errors() {
        let processor = RasterProcessor::new();
        let result = processor.transcode(
            b"",
            &TranscodeParams {
                width: 100,
                height: 100,
                quality: Quality::default(),
            },
        );
        assert!(result.is_err());
    }
}
