use super::item_store::ItemStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = ItemStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ItemStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---
