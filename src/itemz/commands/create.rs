use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ItemzError, Result};
use crate::model::NewItem;
use crate::store::backend::StorageBackend;
use crate::store::ItemStore;

pub fn run<B: StorageBackend>(store: &mut ItemStore<B>, candidate: NewItem) -> Result<CmdResult> {
    validate(&candidate)?;
    let item = store.add(candidate)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Item added successfully:"))
        .with_items(vec![item]))
}

/// Name and description must both be non-empty.
pub fn validate(candidate: &NewItem) -> Result<()> {
    if candidate.name.is_empty() {
        return Err(ItemzError::Validation("Please enter a name".into()));
    }
    if candidate.description.is_empty() {
        return Err(ItemzError::Validation("Please enter a description".into()));
    }
    Ok(())
}
