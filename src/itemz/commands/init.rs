use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ItemStore;

pub fn run<B: StorageBackend>(store: &mut ItemStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.initialize()? {
        result.add_message(CmdMessage::info(format!(
            "Initialized empty store at {}",
            store.location().display()
        )));
    }
    Ok(result)
}
