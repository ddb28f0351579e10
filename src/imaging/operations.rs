//! High-level image operations.
//!
//! These functions combine calculations with processor execution.
//! They take options, compute target dimensions, and call the processor.

use super::calculations::fit_to_max_width;
use super::data_uri::{self, JPEG_MIME};
use super::params::{Quality, TranscodeParams};
use super::processor::{CodecError, ImageProcessor};
use super::raster;
use log::debug;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Options for normalizing an image into its stored representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Upper bound for the output width in pixels.
    pub max_width: u32,
    /// JPEG encoding quality.
    pub quality: Quality,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_width: 800,
            quality: Quality::default(),
        }
    }
}

/// Read an image file into a self-contained `data:` URI.
///
/// The MIME type is sniffed from the file's bytes, never from its extension.
/// No pixel work happens here; the bytes travel as-is.
pub fn read_to_data_uri(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mime = raster::sniff_mime(&bytes)?;
    debug!("read {} ({} bytes, {})", path.display(), bytes.len(), mime);
    Ok(data_uri::encode(mime, &bytes))
}

/// Normalize a portable image into the stored representation.
///
/// Decodes the URI payload, caps the width at `options.max_width` with the
/// height following proportionally, and re-encodes as JPEG at
/// `options.quality`. The encode step always runs, so the result is a
/// `data:image/jpeg;base64,…` string even when no scaling was needed.
/// A payload the processor cannot decode comes back as
/// [`CodecError::Decode`].
pub fn normalize(
    processor: &impl ImageProcessor,
    portable: &str,
    options: &NormalizeOptions,
) -> Result<String> {
    let parsed = data_uri::parse(portable)?;
    let dims = processor.identify(&parsed.bytes)?;
    let (width, height) = fit_to_max_width((dims.width, dims.height), options.max_width);

    debug!(
        "normalize {}x{} -> {}x{} at quality {}",
        dims.width,
        dims.height,
        width,
        height,
        options.quality.value()
    );

    let jpeg = processor.transcode(
        &parsed.bytes,
        &TranscodeParams {
            width,
            height,
            quality: options.quality,
        },
    )?;
    Ok(data_uri::encode(JPEG_MIME, &jpeg))
}

/// Read one image file and normalize it in a single step.
pub fn ingest_file(
    processor: &impl ImageProcessor,
    path: &Path,
    options: &NormalizeOptions,
) -> Result<String> {
    let portable = read_to_data_uri(path)?;
    normalize(processor, &portable, options)
}

/// Ingest a multi-file selection, strictly one file at a time.
///
/// Sequential by contract: only one decoded bitmap is resident at any
/// moment. The first failure aborts the batch and nothing from a partially
/// processed selection is returned.
pub fn ingest_files(
    processor: &impl ImageProcessor,
    paths: &[PathBuf],
    options: &NormalizeOptions,
) -> Result<Vec<String>> {
    let mut encoded = Vec::with_capacity(paths.len());
    for path in paths {
        encoded.push(ingest_file(processor, path, options)?);
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::imaging::processor::tests::{MOCK_JPEG, MockProcessor, RecordedOp};
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

    /// Write a small valid JPEG file and return its path.
    fn jpeg_file(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, jpeg_bytes(width, height)).unwrap();
        path
    }

    // =========================================================================
    // read_to_data_uri tests
    // =========================================================================

    #[test]
    fn read_to_data_uri_sniffs_mime_from_bytes() {
        let tmp = tempfile::TempDir::new().unwrap();
        // Extension lies; the bytes say JPEG.
        let path = jpeg_file(tmp.path(), "photo.png", 20, 10);

        let uri = read_to_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));

        let parsed = data_uri::parse(&uri).unwrap();
        assert_eq!(parsed.bytes, jpeg_bytes(20, 10));
    }

    #[test]
    fn read_to_data_uri_missing_file_errors() {
        let result = read_to_data_uri(Path::new("/nonexistent/photo.jpg"));
        assert!(matches!(result, Err(CodecError::Io(_))));
    }

    // =========================================================================
    // normalize tests
    // =========================================================================

    #[test]
    fn normalize_caps_width_at_max() {
        let processor = MockProcessor::with_dimensions(vec![Dimensions {
            width: 1600,
            height: 1200,
        }]);
        let portable = data_uri::encode("image/png", b"pixels");

        let result = normalize(&processor, &portable, &NormalizeOptions::default()).unwrap();
        assert_eq!(result, data_uri::encode("image/jpeg", MOCK_JPEG));

        let ops = processor.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(
            &ops[1],
            RecordedOp::Transcode {
                width: 800,
                height: 600,
                quality: 70,
                ..
            }
        ));
    }

    #[test]
    fn normalize_narrow_image_keeps_dimensions_but_still_transcodes() {
        let processor = MockProcessor::with_dimensions(vec![Dimensions {
            width: 640,
            height: 480,
        }]);
        let portable = data_uri::encode("image/gif", b"pixels");

        normalize(&processor, &portable, &NormalizeOptions::default()).unwrap();

        let ops = processor.get_operations();
        assert!(matches!(
            &ops[1],
            RecordedOp::Transcode {
                width: 640,
                height: 480,
                ..
            }
        ));
    }

    #[test]
    fn normalize_honors_custom_options() {
        let processor = MockProcessor::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 500,
        }]);
        let portable = data_uri::encode("image/jpeg", b"pixels");
        let options = NormalizeOptions {
            max_width: 400,
            quality: Quality::new(55),
        };

        normalize(&processor, &portable, &options).unwrap();

        let ops = processor.get_operations();
        assert!(matches!(
            &ops[1],
            RecordedOp::Transcode {
                width: 400,
                height: 200,
                quality: 55,
                ..
            }
        ));
    }

    #[test]
    fn normalize_surfaces_decode_failure() {
        // Unscripted mock fails identify the way a processor fails on
        // undecodable bytes; the error must come back, not stall.
        let processor = MockProcessor::new();
        let portable = data_uri::encode("image/jpeg", b"garbage");

        let result = normalize(&processor, &portable, &NormalizeOptions::default());
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn normalize_rejects_plain_url_before_touching_processor() {
        let processor = MockProcessor::new();

        let result = normalize(
            &processor,
            "https://example.com/photo.jpg",
            &NormalizeOptions::default(),
        );
        assert!(matches!(result, Err(CodecError::InvalidDataUri(_))));
        assert!(processor.get_operations().is_empty());
    }

    // =========================================================================
    // ingest_files tests
    // =========================================================================

    #[test]
    fn ingest_files_processes_sequentially_in_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = vec![
            jpeg_file(tmp.path(), "a.jpg", 30, 20),
            jpeg_file(tmp.path(), "b.jpg", 40, 20),
        ];
        // Scripted dims pop from the back: first file sees 900x300.
        let processor = MockProcessor::with_dimensions(vec![
            Dimensions {
                width: 1200,
                height: 600,
            },
            Dimensions {
                width: 900,
                height: 300,
            },
        ]);

        let encoded = ingest_files(&processor, &paths, &NormalizeOptions::default()).unwrap();
        assert_eq!(encoded.len(), 2);

        let ops = processor.get_operations();
        assert_eq!(ops.len(), 4);
        assert!(matches!(&ops[0], RecordedOp::Identify { .. }));
        assert!(matches!(
            &ops[1],
            RecordedOp::Transcode {
                width: 800,
                height: 267,
                ..
            }
        ));
        assert!(matches!(&ops[2], RecordedOp::Identify { .. }));
        assert!(matches!(
            &ops[3],
            RecordedOp::Transcode {
                width: 800,
                height: 400,
                ..
            }
        ));
    }

    #[test]
    fn ingest_files_aborts_batch_on_first_failure() {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = vec![
            jpeg_file(tmp.path(), "ok.jpg", 30, 20),
            tmp.path().join("missing.jpg"),
            jpeg_file(tmp.path(), "never-reached.jpg", 30, 20),
        ];
        let processor = MockProcessor::with_dimensions(vec![Dimensions {
            width: 30,
            height: 20,
        }]);

        let result = ingest_files(&processor, &paths, &NormalizeOptions::default());
        assert!(matches!(result, Err(CodecError::Io(_))));

        // First file fully processed, third never started.
        let ops = processor.get_operations();
        assert_eq!(ops.len(), 2);
    }
}
