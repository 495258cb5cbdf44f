use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ItemStore;

pub fn run<B: StorageBackend>(store: &ItemStore<B>, id: &str) -> Result<CmdResult> {
    Ok(match store.find_by_id(id)? {
        Some(item) => CmdResult::default()
            .with_message(CmdMessage::success("Item found:"))
            .with_items(vec![item]),
        None => CmdResult::not_found(id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, init};
    use crate::model::NewItem;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_created_item() {
        let mut store = InMemoryStore::new();
        init::run(&mut store).unwrap();
        let created = create::run(&mut store, NewItem::new("A", "B")).unwrap().items;

        let result = run(&store, &created[0].id).unwrap();
        assert_eq!(result.items, created);
        assert!(!result.is_not_found());
    }

    #[test]
    fn reports_missing_id() {
        let mut store = InMemoryStore::new();
        init::run(&mut store).unwrap();

        let result = run(&store, "42").unwrap();
        assert!(result.is_not_found());
        assert_eq!(result.messages[0].content, "Item with ID 42 not found");
    }
}
