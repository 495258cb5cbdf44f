use crate::error::Result;
use crate::model::Container;
use std::path::PathBuf;

/// Raw whole-container I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `ItemStore` handles the "what" (ids, merge, ordering).
pub trait StorageBackend {
    /// Whether any backing state exists yet.
    fn exists(&self) -> bool;

    /// Read the entire container.
    /// Missing or malformed state is `ItemzError::StorageRead`.
    fn load(&self) -> Result<Container>;

    /// Replace the entire container.
    /// MUST be atomic: a reader sees either the old container or the new one.
    fn save(&self, container: &Container) -> Result<()>;

    /// Where the state lives. Virtual for non-file backends.
    fn location(&self) -> PathBuf;
}
