//! # Storage Layer
//!
//! [`ItemStore`] is the record store: it owns the ordered sequence of items and
//! the rules for identifying, adding, merging and removing them. Raw I/O sits
//! behind the [`backend::StorageBackend`] trait.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production file-based storage
//!   - The whole container lives in one JSON file (`items.json` by default)
//!   - Writes go to a temp file that is renamed over the target
//!
//! - [`mem_backend::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Counts reads and writes, can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! { "items": [ { "id": "...", "name": "...", "description": "...", ... }, ... ] }
//! ```
//!
//! Granularity is the whole container. There is no locking: two processes
//! mutating the same file concurrently can lose updates.

pub mod backend;
pub mod fs_backend;
pub mod ids;
pub mod item_store;
pub mod mem_backend;
pub mod memory;

pub use ids::IdFormat;
pub use item_store::ItemStore;
pub use memory::InMemoryStore;

use fs_backend::FsBackend;

pub type FileStore = ItemStore<FsBackend>;
