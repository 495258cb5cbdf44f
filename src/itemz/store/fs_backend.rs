use super::backend::StorageBackend;
use crate::error::{ItemzError, Result};
use crate::model::Container;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Container persisted as a single JSON document.
pub struct FsBackend {
    path: PathBuf,
    pretty: bool,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn encode(&self, container: &Container) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(container)?
        } else {
            serde_json::to_string(container)?
        };
        Ok(encoded)
    }
}

impl StorageBackend for FsBackend {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<Container> {
        if !self.exists() {
            return Err(ItemzError::read(&self.path, "store file does not exist"));
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| ItemzError::read(&self.path, e))?;
        let container: Container =
            serde_json::from_str(&content).map_err(|e| ItemzError::read(&self.path, e))?;
        debug!(path = %self.path.display(), items = container.items.len(), "loaded container");
        Ok(container)
    }

    fn save(&self, container: &Container) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir).map_err(|e| ItemzError::write(&dir, e))?;

        let content = self.encode(container)?;

        // Write beside the target, then rename over it
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "items.json".to_string());
        let tmp_file = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ItemzError::write(&self.path, e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ItemzError::write(&self.path, e));
        }

        debug!(path = %self.path.display(), items = container.items.len(), "saved container");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
