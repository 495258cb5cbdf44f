use super::backend::StorageBackend;
use crate::error::{ItemzError, Result};
use crate::model::Container;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since itemz is single-threaded.
/// Counts full reads and writes so tests can check side-effect contracts.
#[derive(Default)]
pub struct MemBackend {
    container: RefCell<Option<Container>>,
    simulate_write_error: Cell<bool>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing container instead of no state at all.
    pub fn with_container(container: Container) -> Self {
        let backend = Self::new();
        *backend.container.borrow_mut() = Some(container);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn reset_counters(&self) {
        self.reads.set(0);
        self.writes.set(0);
    }
}

impl StorageBackend for MemBackend {
    fn exists(&self) -> bool {
        self.container.borrow().is_some()
    }

    fn load(&self) -> Result<Container> {
        self.reads.set(self.reads.get() + 1);
        self.container
            .borrow()
            .clone()
            .ok_or_else(|| ItemzError::read(self.location(), "store has not been initialized"))
    }

    fn save(&self, container: &Container) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ItemzError::write(
                self.location(),
                io::Error::other("simulated write error"),
            ));
        }
        self.writes.set(self.writes.get() + 1);
        *self.container.borrow_mut() = Some(container.clone());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://items.json")
    }
}
