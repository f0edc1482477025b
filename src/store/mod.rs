//! Document Store Module
//!
//! Persists every user and every per-user collection in one human-readable JSON
//! document (`<DATA_DIR>/db.json`).
//!
//! ## Core Concepts
//! - **Whole-document persistence**: reads and writes always cover the complete
//!   structure; there is no partial update and no in-memory cache between requests.
//! - **Critical section**: `DocumentStore::update` serializes load-mutate-save so
//!   concurrent requests cannot overwrite each other's changes.
//! - **Token resolution**: users are looked up by panel or phone token with a
//!   first-match linear scan.

pub mod coerce;
pub mod document;
pub mod ids;
pub mod types;
