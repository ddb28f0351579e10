//! Image processing: pure Rust, in-memory, data URIs in and out.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Resize** | Lanczos3, width capped at the configured maximum |
//! | **Encode** | JPEG via `image::codecs::jpeg::JpegEncoder` |
//! | **Data URIs** | `base64` STANDARD engine |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Processor**: [`ImageProcessor`] trait + [`RasterProcessor`]
//! - **Data URIs**: the `data:<mime>;base64,…` wire shape
//! - **Operations**: High-level functions combining calculations + processor

mod calculations;
pub mod data_uri;
pub mod operations;
mod params;
pub mod processor;
pub mod raster;

pub use calculations::fit_to_max_width;
pub use processor::{CodecError, ImageProcessor};
pub use raster::RasterProcessor;
// Re-exported for tests (operations.rs scripts mock dimensions with it)
#[cfg(test)]
pub use processor::Dimensions;
pub use operations::{NormalizeOptions, ingest_file, ingest_files, normalize, read_to_data_uri};
pub use params::{Quality, TranscodeParams};
