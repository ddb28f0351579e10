//! Image processor trait and shared types.
//!
//! The [`ImageProcessor`] trait defines the two operations every processor
//! must support: identify and transcode. Both work on encoded bytes held in
//! memory; nothing in this module touches the filesystem.
//!
//! The production implementation is
//! [`RasterProcessor`](super::raster::RasterProcessor), pure Rust on top of
//! the `image` crate's decoders. Everything is statically linked into the
//! binary.

use super::params::TranscodeParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a data URI: {0}")]
    InvalidDataUri(String),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processors.
///
/// Every processor must implement both operations, identify and transcode,
/// so the rest of the codebase is processor-agnostic. A processor that cannot
/// make sense of the bytes reports [`CodecError::Decode`] rather than
/// stalling; callers rely on every input producing either output or an error.
pub trait ImageProcessor {
    /// Get image dimensions from encoded bytes.
    fn identify(&self, bytes: &[u8]) -> Result<Dimensions, CodecError>;

    /// Decode, scale to the exact target dimensions, and re-encode as JPEG.
    ///
    /// Runs the encode step even when the target matches the source, so the
    /// returned bytes are JPEG no matter what format came in.
    fn transcode(&self, bytes: &[u8], params: &TranscodeParams) -> Result<Vec<u8>, CodecError>;
}
