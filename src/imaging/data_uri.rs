//! Encoding and parsing of `data:` URIs.
//!
//! The persisted collection stores every image as a
//! `data:<mime>;base64,<payload>` string, so records stay self-contained and
//! survive JSON round trips with no side files. This module owns that wire
//! shape; pixel work stays in the processors.

use super::processor::CodecError;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// MIME type of every normalized image.
pub const JPEG_MIME: &str = "image/jpeg";

/// A parsed `data:` URI: MIME type plus decoded payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Encode bytes as a `data:<mime>;base64,<payload>` string.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Parse a `data:` URI produced by [`encode`].
///
/// Only base64 payloads are accepted; percent-encoded data URIs are not part
/// of the persisted contract.
pub fn parse(uri: &str) -> Result<DataUri, CodecError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CodecError::InvalidDataUri("missing data: prefix".to_string()))?;

    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| CodecError::InvalidDataUri("missing ;base64, marker".to_string()))?;

    let bytes = BASE64
        .decode(payload)
        .map_err(|e| CodecError::InvalidDataUri(format!("bad base64 payload: {}", e)))?;

    Ok(DataUri {
        mime: mime.to_string(),
        bytes,
    })
}
