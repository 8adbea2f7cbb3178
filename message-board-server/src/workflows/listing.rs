use document_store::{DocumentStore, MessageRecord};
use crate::errors::BoardErr;

/// Most records the home page ever shows.
pub const LISTING_LIMIT: usize = 10;

pub struct ListingWorkflow<'a> {
    document_store: &'a dyn DocumentStore,
}

impl<'a> ListingWorkflow<'a> {
    pub fn new(document_store: &'a dyn DocumentStore) -> Self {
        Self { document_store }
    }

    /// Up to [`LISTING_LIMIT`] records, in whatever order the store returns them.
    pub async fn recent(&self) -> Result<Vec<MessageRecord>, BoardErr> {
        let mut records = self.document_store.list(LISTING_LIMIT).await?;
        records.truncate(LISTING_LIMIT);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_store::MemoryDocumentStore;
    use crate::testing::{FailingDocumentStore, OverfullDocumentStore};

    #[tokio::test]
    async fn test_never_returns_more_than_the_limit() {
        let store = MemoryDocumentStore::new();
        for i in 0..30 {
            store.insert(&MessageRecord::new(format!("message {}", i), None)).await.unwrap();
        }

        let records = ListingWorkflow::new(&store).recent().await.unwrap();
        assert_eq!(records.len(), LISTING_LIMIT);
    }

    #[tokio::test]
    async fn test_caps_stores_that_ignore_the_limit() {
        let records = ListingWorkflow::new(&OverfullDocumentStore).recent().await.unwrap();
        assert_eq!(records.len(), LISTING_LIMIT);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryDocumentStore::new();
        assert!(ListingWorkflow::new(&store).recent().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let result = ListingWorkflow::new(&FailingDocumentStore).recent().await;
        assert!(matches!(result, Err(BoardErr::Document(_))));
    }
}
