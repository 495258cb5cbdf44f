use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ItemStore;

pub fn run<B: StorageBackend>(store: &mut ItemStore<B>, id: &str) -> Result<CmdResult> {
    if !store.delete_by_id(id)? {
        return Ok(CmdResult::not_found(id));
    }
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Item with ID {} deleted successfully",
        id
    ))))
}

/// The result reported when the user declines the confirmation.
pub fn cancelled() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning("Delete operation cancelled"))
}
