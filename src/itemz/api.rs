//! # API Facade
//!
//! The single entry point for itemz operations, whatever UI sits on top.
//! It dispatches to `commands/*.rs` and returns structured [`CmdResult`]s; it
//! holds no business logic and never touches stdout or stdin.
//!
//! `ItemzApi<B>` is generic over the storage backend:
//! - Production: `ItemzApi<FsBackend>` (see [`crate::store::FileStore`])
//! - Testing: `ItemzApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{Item, ItemPatch, NewItem};
use crate::store::backend::StorageBackend;
use crate::store::ItemStore;

pub struct ItemzApi<B: StorageBackend> {
    store: ItemStore<B>,
}

impl<B: StorageBackend> ItemzApi<B> {
    pub fn new(store: ItemStore<B>) -> Self {
        Self { store }
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn create_item(&mut self, name: String, description: String) -> Result<CmdResult> {
        commands::create::run(&mut self.store, NewItem { name, description })
    }

    pub fn list_items(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_item(&self, id: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, id)
    }

    /// Convenience over `find_item` for callers that only need the record.
    pub fn get_item(&self, id: &str) -> Result<Option<Item>> {
        self.store.find_by_id(id)
    }

    pub fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_item(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> ItemzApi<crate::store::mem_backend::MemBackend> {
        let mut api = ItemzApi::new(InMemoryStore::new());
        api.init().unwrap();
        api
    }

    #[test]
    fn create_dispatches_and_returns_item() {
        let mut api = api();
        let result = api.create_item("Milk".into(), "2%".into()).unwrap();
        assert_eq!(result.items[0].name, "Milk");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn get_item_returns_record() {
        let mut api = api();
        let id = api.create_item("Milk".into(), "2%".into()).unwrap().items[0]
            .id
            .clone();
        assert_eq!(api.get_item(&id).unwrap().unwrap().description, "2%");
        assert!(api.get_item("missing").unwrap().is_none());
    }

    #[test]
    fn update_and_delete_dispatch() {
        let mut api = api();
        let id = api.create_item("Milk".into(), "2%".into()).unwrap().items[0]
            .id
            .clone();

        let updated = api
            .update_item(&id, &ItemPatch::new().description("whole"))
            .unwrap();
        assert_eq!(updated.items[0].description, "whole");

        let deleted = api.delete_item(&id).unwrap();
        assert!(!deleted.is_not_found());
        assert!(api.find_item(&id).unwrap().is_not_found());
        assert!(api.list_items().unwrap().items.is_empty());
    }
}
