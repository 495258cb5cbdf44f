use crate::api::ItemzApi;
use crate::config::{ItemzConfig, DEFAULT_DATA_FILENAME};
use crate::error::{ItemzError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ItemzContext {
    pub api: ItemzApi<FsBackend>,
    pub config: ItemzConfig,
    pub data_file: PathBuf,
}

/// `items.json` under the platform data directory.
pub fn default_data_file() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "itemz", "itemz")
        .ok_or_else(|| ItemzError::Config("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().join(DEFAULT_DATA_FILENAME))
}

/// The config file lives next to the data file.
pub fn config_dir_for(data_file: &Path) -> PathBuf {
    match data_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Build the API for one process run and make sure the backing file exists.
pub fn initialize(data_file: Option<PathBuf>) -> Result<ItemzContext> {
    let data_file = match data_file {
        Some(path) => path,
        None => default_data_file()?,
    };

    let config = ItemzConfig::load(config_dir_for(&data_file))?;
    let backend = FsBackend::new(&data_file).with_pretty(config.pretty);
    let store = FileStore::with_backend(backend).with_id_format(config.id_format);

    let mut api = ItemzApi::new(store);
    for message in api.init()?.messages {
        info!("{}", message.content);
    }

    Ok(ItemzContext {
        api,
        config,
        data_file,
    })
}
