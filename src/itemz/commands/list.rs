use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ItemStore;

pub fn run<B: StorageBackend>(store: &ItemStore<B>) -> Result<CmdResult> {
    let items = store.list_all()?;
    let result = CmdResult::default();
    if items.is_empty() {
        return Ok(result.with_message(CmdMessage::warning("No items found")));
    }
    Ok(result.with_items(items))
}
