use tokio::sync::RwLock;

use crate::models::DiaryEntry;

/// In-memory diary storage, kept in insertion order for the lifetime of the
/// process.
///
/// Ids are not required to be unique. Lookups and deletes scan from the front
/// and act on the first matching entry only.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: RwLock<Vec<DiaryEntry>>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the entry unconditionally and hands it back.
    pub async fn create(&self, entry: DiaryEntry) -> DiaryEntry {
        self.entries.write().await.push(entry.clone());
        entry
    }

    pub async fn list(&self) -> Vec<DiaryEntry> {
        self.entries.read().await.clone()
    }

    pub async fn get(&self, id: i64) -> Option<DiaryEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }

    pub async fn delete(&self, id: i64) -> Option<DiaryEntry> {
        let mut entries = self.entries.write().await;
        let position = entries.iter().position(|entry| entry.id == id)?;
        Some(entries.remove(position))
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn entry(id: i64, text: &str, mood: &str) -> DiaryEntry {
        DiaryEntry {
            id,
            date: "2025-10-19".to_string(),
            text: text.to_string(),
            mood: mood.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_returns_only_entry() {
        let store = EntryStore::new();
        let created = store.create(entry(1, "Walked by the sea", "happy")).await;

        assert_eq!(store.list().await, vec![created]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = EntryStore::new();
        store.create(entry(1, "first", "happy")).await;
        store.create(entry(2, "second", "sad")).await;

        assert_eq!(store.get(1).await.unwrap().text, "first");
        assert!(store.get(3).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let store = EntryStore::new();
        store.create(entry(1, "gone soon", "neutral")).await;

        let deleted = store.delete(1).await.unwrap();
        assert_eq!(deleted.text, "gone soon");
        assert!(store.list().await.is_empty());
        assert!(store.delete(1).await.is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = EntryStore::new();
        store.create(entry(5, "a", "happy")).await;
        store.create(entry(2, "b", "sad")).await;
        store.create(entry(9, "c", "angry")).await;

        let ids: Vec<i64> = store.list().await.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_resolve_to_first_match() {
        let store = EntryStore::new();
        store.create(entry(1, "original", "happy")).await;
        store.create(entry(1, "duplicate", "sad")).await;

        assert_eq!(store.count().await, 2);
        assert_eq!(store.get(1).await.unwrap().text, "original");

        let deleted = store.delete(1).await.unwrap();
        assert_eq!(deleted.text, "original");
        assert_eq!(store.get(1).await.unwrap().text, "duplicate");
    }

    #[tokio::test]
    async fn test_concurrent_creates_all_land() {
        let store = Arc::new(EntryStore::new());

        let handles: Vec<_> = (0..32)
            .map(|id| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .create(entry(id, &format!("entry {}", id), "neutral"))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let mut entries = store.list().await;
        assert_eq!(entries.len(), 32);
        entries.sort_by_key(|e| e.id);
        for (expected, e) in (0..32).zip(entries.iter()) {
            assert_eq!(e.id, expected);
            assert_eq!(e.text, format!("entry {}", expected));
            assert_eq!(e.mood, "neutral");
        }
    }
}
