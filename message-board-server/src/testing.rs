//! Store doubles for workflow and handler tests.

use std::sync::Mutex;
use async_trait::async_trait;
use blob_store::{BlobResult, BlobStore, BlobStoreError};
use document_store::{DocumentStore, DocumentStoreError, InsertOutcome, MessageRecord, StoreResult};

/// Remembers every upload; URLs are `{base}/{name}`.
pub struct RecordingBlobStore {
    base_url: String,
    uploads: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingBlobStore {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.to_string(), uploads: Mutex::new(Vec::new()) }
    }

    pub fn uploads(&self) -> Vec<(String, Vec<u8>)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for RecordingBlobStore {
    async fn put_blob(&self, blob_name: &str, data: &[u8]) -> BlobResult<()> {
        self.uploads.lock().unwrap().push((blob_name.to_string(), data.to_vec()));
        Ok(())
    }

    fn public_url(&self, blob_name: &str) -> String {
        format!("{}/{}", self.base_url, blob_name)
    }
}

pub struct FailingBlobStore;

#[async_trait]
impl BlobStore for FailingBlobStore {
    async fn put_blob(&self, _blob_name: &str, _data: &[u8]) -> BlobResult<()> {
        Err(BlobStoreError::Status { status: 503, body: "unavailable".to_string() })
    }

    fn public_url(&self, blob_name: &str) -> String {
        format!("http://unreachable/{}", blob_name)
    }
}

pub struct FailingDocumentStore;

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn insert(&self, _record: &MessageRecord) -> StoreResult<InsertOutcome> {
        Err(DocumentStoreError::Status { status: 503, body: "unavailable".to_string() })
    }

    async fn list(&self, _limit: usize) -> StoreResult<Vec<MessageRecord>> {
        Err(DocumentStoreError::Status { status: 503, body: "unavailable".to_string() })
    }
}

/// Claims every id is already taken.
pub struct DuplicateDocumentStore;

#[async_trait]
impl DocumentStore for DuplicateDocumentStore {
    async fn insert(&self, _record: &MessageRecord) -> StoreResult<InsertOutcome> {
        Ok(InsertOutcome::AlreadyExists)
    }

    async fn list(&self, _limit: usize) -> StoreResult<Vec<MessageRecord>> {
        Ok(Vec::new())
    }
}

/// Ignores the requested limit.
pub struct OverfullDocumentStore;

#[async_trait]
impl DocumentStore for OverfullDocumentStore {
    async fn insert(&self, _record: &MessageRecord) -> StoreResult<InsertOutcome> {
        Ok(InsertOutcome::Inserted)
    }

    async fn list(&self, _limit: usize) -> StoreResult<Vec<MessageRecord>> {
        Ok((0..50).map(|i| MessageRecord::new(format!("message {}", i), None)).collect())
    }
}
