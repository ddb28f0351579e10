//! # Wandermark
//!
//! A local-first travel bookmark manager. Places you plan to visit (or
//! already did) are stored as self-contained records: title, location,
//! visit status, and photos embedded directly in the record as JPEG data
//! URIs. The whole collection lives in one JSON slot.
//!
//! # Architecture: Three Collaborators
//!
//! ```text
//! 1. Imaging   image file  →  normalized JPEG data URI   (decode, downscale, re-encode)
//! 2. Store     records     →  in-memory collection       (create/update/delete/query)
//! 3. Vault     collection  →  one JSON slot in a backend (save/load)
//! ```
//!
//! The presentation layer (the `wandermark` binary) composes them: read a
//! file, normalize it, attach it to a record, mutate the store, save the
//! whole collection. Each collaborator is independently testable; none of
//! them knows the others exist.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Image pipeline: data URI codec, dimension probing, downscale and JPEG re-encode |
//! | [`store`] | In-memory bookmark collection: newest-first ordering, status filter, search |
//! | [`storage`] | Persistence: `KeyValueStore` backends and the single-slot `BookmarkVault` |
//! | [`types`] | `TravelBookmark` record and its camelCase JSON wire form |
//! | [`config`] | `config.toml` loading, defaults, and validation |
//! | [`output`] | CLI output formatting: pure `format_*` helpers plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Photos Live Inside Records
//!
//! A bookmark's photos are base64 JPEG data URIs stored in the record
//! itself, not files on disk next to it. The collection serializes to a
//! single JSON document, so backup is one file copy and a record can never
//! dangle a reference to a missing image. The cost (a 4/3 base64 inflation
//! and a storage quota that arrives sooner) is contained by normalizing
//! every photo down to a bounded width before it is stored.
//!
//! ## Every Photo Is Re-Encoded
//!
//! [`imaging::normalize`] transcodes unconditionally, even when the source
//! is already narrow enough. Inputs arrive as PNG, GIF, WebP, or oversized
//! JPEG; one decode-encode pass means every stored photo is a JPEG at a
//! known quality with a predictable size, regardless of what came in.
//!
//! ## Injected Seams
//!
//! The two effectful edges are traits: [`imaging::ImageProcessor`] for
//! pixel work and [`storage::KeyValueStore`] for the durable slot. Tests
//! script a recording mock processor and an in-memory store; production
//! wires the `image`-crate processor and an atomic-rename file store.
//! Store and vault logic cannot tell which implementation they got.
//!
//! ## Load Never Fails
//!
//! [`storage::BookmarkVault::load`] returns a collection, not a `Result`.
//! A missing slot is a first run; a corrupt slot is logged and treated as
//! empty. The app always starts. Writes are the opposite: all-or-nothing,
//! and a failed save (quota, IO) leaves the previously persisted bytes
//! intact.
//!
//! ## Whole-Collection Saves
//!
//! Every mutation rewrites the entire collection under one fixed key
//! ([`storage::BOOKMARKS_KEY`]). At bookmark-manager scale the simplicity
//! (no deltas, no indexes, no partial-write states to reason about)
//! comfortably outweighs the rewrite cost.

pub mod config;
pub mod imaging;
pub mod output;
pub mod storage;
pub mod store;
pub mod types;
