use async_trait::async_trait;
use thiserror::Error;
use crate::record::MessageRecord;

pub type StoreResult<T> = Result<T, DocumentStoreError>;

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("Failed to read or write the local database")]
    Rocks(#[from] rocksdb::Error),

    #[error("Failed to encode or decode a message record")]
    Json(#[from] serde_json::Error),

    #[error("Failed to reach the document service")]
    Http(#[from] reqwest::Error),

    #[error("Document service rejected the request with status {status}")]
    Status { status: u16, body: String },

    #[error("Document service key is not valid base64")]
    InvalidKey(#[from] base64::DecodeError),

    #[error("Document service key cannot be used for signing")]
    KeyLength(#[from] hmac::digest::InvalidLength),
}

/// What happened to a record handed to [`DocumentStore::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A record with the same id was already stored; nothing was written.
    AlreadyExists,
}

/// Write-once storage for message records, keyed by record id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores the record unless its id is already present.
    async fn insert(&self, record: &MessageRecord) -> StoreResult<InsertOutcome>;

    /// Returns at most `limit` records in the store's natural order.
    async fn list(&self, limit: usize) -> StoreResult<Vec<MessageRecord>>;
}
