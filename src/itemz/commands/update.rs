use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemPatch;
use crate::store::backend::StorageBackend;
use crate::store::ItemStore;

pub fn run<B: StorageBackend>(
    store: &mut ItemStore<B>,
    id: &str,
    patch: &ItemPatch,
) -> Result<CmdResult> {
    Ok(match store.update_by_id(id, patch)? {
        Some(item) => CmdResult::default()
            .with_message(CmdMessage::success("Item updated successfully:"))
            .with_items(vec![item]),
        None => CmdResult::not_found(id),
    })
}
