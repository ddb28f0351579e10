//! In-memory bookmark collection.
//!
//! The store owns the working set of [`TravelBookmark`] records and nothing
//! else: it never touches persistence, so it can be driven entirely from
//! tests. Mutations go through `&mut self`, which is what keeps them from
//! interleaving mid-operation.
//!
//! Ordering invariant: newest-created record first. `create` prepends,
//! `update` replaces in place, `delete` removes exactly one.

use crate::types::{BookmarkStatus, NewBookmark, StatusFilter, TravelBookmark};
use chrono::Utc;
use log::debug;
use uuid::Uuid;

/// Ordered collection of travel bookmarks.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    bookmarks: Vec<TravelBookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a collection previously produced by [`records`](Self::records).
    pub fn from_records(records: Vec<TravelBookmark>) -> Self {
        Self { bookmarks: records }
    }

    /// Create a record from user-supplied fields.
    ///
    /// Assigns a fresh UUID and the current wall-clock time, prepends so the
    /// newest record is first, and returns a copy of what was stored.
    pub fn create(&mut self, draft: NewBookmark) -> TravelBookmark {
        let record = TravelBookmark {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            location: draft.location,
            status: draft.status,
            cover_image: draft.cover_image,
            images: Vec::new(),
            created_at: Utc::now().timestamp_millis(),
            tags: Vec::new(),
        };
        debug!("create bookmark {} ({})", record.id, record.title);
        self.bookmarks.insert(0, record.clone());
        record
    }

    /// Replace the record sharing `record.id`, keeping its position.
    ///
    /// An id with no match leaves the collection untouched; callers that
    /// update a record deleted out from under them lose the edit and nothing
    /// more.
    pub fn update(&mut self, record: TravelBookmark) {
        match self.bookmarks.iter_mut().find(|b| b.id == record.id) {
            Some(existing) => *existing = record,
            None => debug!("update for unknown bookmark {} ignored", record.id),
        }
    }

    /// Remove the record with the given id. No-op if absent.
    pub fn delete(&mut self, id: &str) {
        if let Some(pos) = self.bookmarks.iter().position(|b| b.id == id) {
            self.bookmarks.remove(pos);
            debug!("delete bookmark {}", id);
        }
    }

    /// Records matching a status filter and a search needle.
    ///
    /// The needle matches case-insensitively against title or location; an
    /// empty needle matches everything. Result order is collection order.
    pub fn query(&self, filter: StatusFilter, search: &str) -> Vec<&TravelBookmark> {
        let needle = search.to_lowercase();
        self.bookmarks
            .iter()
            .filter(|b| filter.matches(b.status))
            .filter(|b| {
                needle.is_empty()
                    || b.title.to_lowercase().contains(&needle)
                    || b.location.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&TravelBookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Full collection in order, for display and persistence.
    pub fn records(&self) -> &[TravelBookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
