use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemzError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Could not read store at {path}: {reason}")]
    StorageRead { path: PathBuf, reason: String },

    #[error("Could not write store at {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl ItemzError {
    pub fn read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ItemzError::StorageRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ItemzError::StorageWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ItemzError>;
