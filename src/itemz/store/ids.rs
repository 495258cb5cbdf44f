use crate::model::Item;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How new item ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdFormat {
    /// Milliseconds since the Unix epoch, bumped past the largest numeric id in the store.
    #[default]
    Timestamp,
    /// Random v4 UUID.
    Uuid,
}

impl IdFormat {
    pub fn generate(self, existing: &[Item]) -> String {
        match self {
            IdFormat::Timestamp => timestamp_id(Utc::now().timestamp_millis(), existing),
            IdFormat::Uuid => uuid_id(existing),
        }
    }
}

/// Milliseconds since the epoch, or one past the largest numeric id when the
/// clock is not ahead of the store. Never returns an id already in `existing`.
pub(crate) fn timestamp_id(now_ms: i64, existing: &[Item]) -> String {
    let max_numeric = existing
        .iter()
        .filter_map(|item| item.id.parse::<i64>().ok())
        .max();

    match max_numeric {
        Some(max) if max >= now_ms => match max.checked_add(1) {
            Some(next) => next.to_string(),
            None => first_free_from(now_ms, existing),
        },
        _ => now_ms.to_string(),
    }
}

/// The largest numeric id is `i64::MAX`: take the first unused number from `start` on.
fn first_free_from(start: i64, existing: &[Item]) -> String {
    (start..=i64::MAX)
        .map(|n| n.to_string())
        .find(|candidate| !existing.iter().any(|item| &item.id == candidate))
        .unwrap_or_else(|| uuid_id(existing))
}

fn uuid_id(existing: &[Item]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !existing.iter().any(|item| item.id == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewItem;

    fn item(id: &str) -> Item {
        Item::new(id.to_string(), NewItem::new("n", "d"))
    }

    #[test]
    fn uses_clock_when_ahead_of_store() {
        assert_eq!(timestamp_id(1_000, &[item("10"), item("999")]), "1000");
    }

    #[test]
    fn bumps_past_ids_from_the_same_millisecond() {
        assert_eq!(timestamp_id(1_000, &[item("1000")]), "1001");
        assert_eq!(timestamp_id(1_000, &[item("1000"), item("1001")]), "1002");
    }

    #[test]
    fn bumps_past_ids_from_a_clock_that_went_backwards() {
        assert_eq!(timestamp_id(500, &[item("1000")]), "1001");
    }

    #[test]
    fn ignores_non_numeric_ids() {
        assert_eq!(timestamp_id(42, &[item("abc"), item("")]), "42");
    }

    #[test]
    fn uuid_ids_parse_as_uuids() {
        let id = IdFormat::Uuid.generate(&[]);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn never_reuses_an_id_at_the_numeric_ceiling() {
        let existing = [item(&i64::MAX.to_string())];
        let id = timestamp_id(1_000, &existing);
        assert_ne!(id, existing[0].id);
        assert_eq!(id, "1000");
    }

    #[test]
    fn skips_taken_ids_at_the_numeric_ceiling() {
        let existing = [item(&i64::MAX.to_string()), item("1000"), item("1001")];
        assert_eq!(timestamp_id(1_000, &existing), "1002");
    }

    #[test]
    fn ceiling_with_clock_at_the_ceiling_falls_back_to_uuid() {
        let existing = [item(&i64::MAX.to_string())];
        let id = timestamp_id(i64::MAX, &existing);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
