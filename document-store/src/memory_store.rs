use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::record::MessageRecord;
use crate::store::{DocumentStore, InsertOutcome, StoreResult};

/// A `DocumentStore` held entirely in process memory. Records come back in id order.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocumentStore {
    records: Arc<RwLock<BTreeMap<Uuid, MessageRecord>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn get(&self, id: &Uuid) -> Option<MessageRecord> {
        self.records.read().await.get(id).cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, record: &MessageRecord) -> StoreResult<InsertOutcome> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        records.insert(record.id, record.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<MessageRecord>> {
        let records = self.records.read().await;
        Ok(records.values().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_list() {
        let store = MemoryDocumentStore::new();
        let record = MessageRecord::new("hello", None);
        assert!(store.is_empty().await);

        assert_eq!(store.insert(&record).await.unwrap(), InsertOutcome::Inserted);
        assert!(!store.is_empty().await);

        let listed = store.list(10).await.unwrap();
        assert_eq!(listed, vec![record]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_not_overwritten() {
        let store = MemoryDocumentStore::new();
        let record = MessageRecord::new("first", None);
        store.insert(&record).await.unwrap();

        let mut clash = MessageRecord::new("second", None);
        clash.id = record.id;

        assert_eq!(store.insert(&clash).await.unwrap(), InsertOutcome::AlreadyExists);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(&record.id).await.unwrap().content, "first");
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let store = MemoryDocumentStore::new();
        for i in 0..25 {
            store.insert(&MessageRecord::new(format!("message {}", i), None)).await.unwrap();
        }

        assert_eq!(store.list(10).await.unwrap().len(), 10);
        assert_eq!(store.list(100).await.unwrap().len(), 25);
    }
}
