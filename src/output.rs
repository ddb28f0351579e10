//! CLI output formatting for bookmark views.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not payload-centric**. The primary
//! display for every bookmark is its semantic identity (positional index,
//! title, photo count) with stored detail shown as indented context lines.
//! Embedded photos are summarized by type and size, never dumped as the
//! base64 payloads they really are.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! 001 Tokyo Trip (3 photos)
//!     Id: 9be34c6a-4a41-4f9f-a2cf-5a3f9e6d2b11
//!     Location: Tokyo, Japan
//!     Status: planned
//!     Added: 2023-11-14
//! ```
//!
//! ## Show
//!
//! ```text
//! Tokyo Trip
//!     Id: 9be34c6a-4a41-4f9f-a2cf-5a3f9e6d2b11
//!     Status: planned
//!     Location: Tokyo, Japan
//!     Added: 2023-11-14 22:13 UTC
//!     Cover: image/jpeg, 24.3 KB
//!     Photos:
//!         001 image/jpeg, 18.2 KB
//!         002 image/jpeg, 31.0 KB
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::types::TravelBookmark;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
///
/// Counts characters, not bytes; the cut can never land inside a
/// multi-byte sequence.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max).collect();
        format!("{}...", kept)
    }
}

/// Human-readable byte size.
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Summarize a stored photo as `mime, size` instead of its raw payload.
///
/// Anything that is not a data URI falls back to a truncated echo of the
/// string itself; display must not fail on odd stored values.
fn data_uri_summary(uri: &str) -> String {
    let Some(rest) = uri.strip_prefix("data:") else {
        return truncate_desc(uri, 32);
    };
    let Some((mime, payload)) = rest.split_once(";base64,") else {
        return truncate_desc(uri, 32);
    };
    // Decoded size is three quarters of the base64 length
    format!("{}, {}", mime, format_size(payload.len() * 3 / 4))
}

/// Creation timestamp (epoch milliseconds) as a UTC calendar date.
fn format_date(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => millis.to_string(),
    }
}

/// Creation timestamp (epoch milliseconds) as a UTC date and time.
fn format_datetime(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => millis.to_string(),
    }
}

// ============================================================================
// List view
// ============================================================================

/// Format a bookmark listing, newest first as stored.
///
/// Information-first: each bookmark leads with its positional index, title,
/// and photo count. Id, location, status, and date are indented context.
pub fn format_bookmark_list(records: &[&TravelBookmark]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No bookmarks found".to_string()];
    }

    let mut lines = Vec::new();
    for (i, record) in records.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} photos)",
            format_index(i + 1),
            record.title,
            record.images.len()
        ));
        lines.push(format!("    Id: {}", record.id));
        lines.push(format!("    Location: {}", record.location));
        lines.push(format!("    Status: {}", record.status));
        lines.push(format!("    Added: {}", format_date(record.created_at)));
    }
    lines
}

/// Print a bookmark listing to stdout.
pub fn print_bookmark_list(records: &[&TravelBookmark]) {
    for line in format_bookmark_list(records) {
        println!("{}", line);
    }
}

// ============================================================================
// Detail view
// ============================================================================

/// Format a single bookmark in full.
///
/// The cover and every gallery photo appear as `mime, size` summaries with
/// 1-based indices; `remove-photo` takes those indices.
pub fn format_bookmark_detail(record: &TravelBookmark) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(record.title.clone());
    lines.push(format!("    Id: {}", record.id));
    lines.push(format!("    Status: {}", record.status));
    lines.push(format!("    Location: {}", record.location));
    lines.push(format!("    Added: {}", format_datetime(record.created_at)));

    match &record.cover_image {
        Some(uri) => lines.push(format!("    Cover: {}", data_uri_summary(uri))),
        None => lines.push("    Cover: none".to_string()),
    }

    if record.images.is_empty() {
        lines.push("    Photos: none".to_string());
    } else {
        lines.push("    Photos:".to_string());
        for (i, uri) in record.images.iter().enumerate() {
            lines.push(format!(
                "        {} {}",
                format_index(i + 1),
                data_uri_summary(uri)
            ));
        }
    }

    if !record.tags.is_empty() {
        lines.push(format!("    Tags: {}", record.tags.join(", ")));
    }

    lines
}

/// Print a single bookmark in full to stdout.
pub fn print_bookmark_detail(record: &TravelBookmark) {
    for line in format_bookmark_detail(record) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
