//! Shared types used across the store, the persistence adapter, and the CLI.
//!
//! [`TravelBookmark`] doubles as the wire contract: the persisted slot holds
//! a JSON array of these records with camelCase field names, and every image
//! travels inside them as a `data:` URI string.

use serde::{Deserialize, Serialize};

/// Trip status, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkStatus {
    Planned,
    Visited,
}

impl std::fmt::Display for BookmarkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookmarkStatus::Planned => write!(f, "planned"),
            BookmarkStatus::Visited => write!(f, "visited"),
        }
    }
}

/// A saved trip: the unit of storage and display.
///
/// Unknown JSON fields are tolerated on load; missing optional fields fall
/// back to their defaults so hand-edited or older data still parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelBookmark {
    /// UUID v4, assigned at creation, immutable, never reused.
    pub id: String,
    pub title: String,
    pub location: String,
    pub status: BookmarkStatus,
    /// Normalized cover image as a `data:` URI; omitted from JSON when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Gallery images in display order, each a `data:` URI.
    #[serde(default)]
    pub images: Vec<String>,
    /// Milliseconds since the UNIX epoch, captured once at creation.
    pub created_at: i64,
    /// Free-form labels. No current flow produces them, but stored data may
    /// carry them and they survive round trips untouched.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// User-supplied fields for a new bookmark; the store fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub location: String,
    pub status: BookmarkStatus,
    pub cover_image: Option<String>,
}

/// Status filter for collection queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Planned,
    Visited,
}

impl StatusFilter {
    pub fn matches(self, status: BookmarkStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Planned => status == BookmarkStatus::Planned,
            StatusFilter::Visited => status == BookmarkStatus::Visited,
        }
    }
}
