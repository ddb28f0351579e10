//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. The high-level
//! [`operations`](super::operations) module builds them and hands them to an
//! [`ImageProcessor`](super::processor::ImageProcessor), which does the
//! actual pixel work. Swapping the processor (for a recording mock in tests)
//! never touches operation logic.
//!
//! ## Types
//!
//! - [`Quality`]: lossy encoding quality (1-100, default 70). Clamped on construction.
//! - [`TranscodeParams`]: full specification for a transcode, target dimensions plus quality.

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(70)
    }
}

/// Parameters for a transcode operation (scale to exact dimensions + JPEG encode).
///
/// The target dimensions may equal the source dimensions; the encode step
/// still runs, so output bytes are always JPEG regardless of input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeParams {
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
