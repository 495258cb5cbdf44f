use super::backend::StorageBackend;
use super::ids::IdFormat;
use crate::error::Result;
use crate::model::{Container, Item, ItemPatch, NewItem};
use std::path::PathBuf;
use tracing::{debug, info};

/// CRUD over the ordered item sequence.
///
/// Every call re-reads the backend; nothing is cached between calls. Mutations
/// write the whole container back exactly once, and only when something changed.
pub struct ItemStore<B: StorageBackend> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    id_format: IdFormat,
}

impl<B: StorageBackend> ItemStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            id_format: IdFormat::default(),
        }
    }

    pub fn with_id_format(mut self, id_format: IdFormat) -> Self {
        self.id_format = id_format;
        self
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    /// Create an empty container if none exists. Returns whether one was created.
    pub fn initialize(&mut self) -> Result<bool> {
        if self.backend.exists() {
            return Ok(false);
        }
        self.backend.save(&Container::default())?;
        info!(location = %self.location().display(), "initialized empty store");
        Ok(true)
    }

    pub fn list_all(&self) -> Result<Vec<Item>> {
        Ok(self.backend.load()?.items)
    }

    pub fn add(&mut self, candidate: NewItem) -> Result<Item> {
        let mut container = self.backend.load()?;
        let id = self.id_format.generate(&container.items);
        let item = Item::new(id, candidate);
        container.items.push(item.clone());
        self.backend.save(&container)?;
        info!(id = %item.id, "added item");
        Ok(item)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Item>> {
        let container = self.backend.load()?;
        Ok(container.items.into_iter().find(|item| item.id == id))
    }

    /// Merge `patch` over the item with `id`, keeping its position and id.
    /// A miss returns `None` and writes nothing.
    pub fn update_by_id(&mut self, id: &str, patch: &ItemPatch) -> Result<Option<Item>> {
        let mut container = self.backend.load()?;
        let Some(index) = container.items.iter().position(|item| item.id == id) else {
            debug!(id, "update target not found");
            return Ok(None);
        };

        let updated = container.items[index].merged(patch)?;
        container.items[index] = updated.clone();
        self.backend.save(&container)?;
        info!(id, "updated item");
        Ok(Some(updated))
    }

    /// Remove every item with `id`. Writes only if the sequence shrank.
    pub fn delete_by_id(&mut self, id: &str) -> Result<bool> {
        let mut container = self.backend.load()?;
        let before = container.items.len();
        container.items.retain(|item| item.id != id);

        if container.items.len() == before {
            debug!(id, "delete target not found");
            return Ok(false);
        }

        self.backend.save(&container)?;
        info!(id, removed = before - container.items.len(), "deleted item");
        Ok(true)
    }
}
