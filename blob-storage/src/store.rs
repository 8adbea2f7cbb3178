use async_trait::async_trait;
use thiserror::Error;

pub type BlobResult<T> = Result<T, BlobStoreError>;

#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("Failed to write blob to disk")]
    Io(#[from] std::io::Error),

    #[error("Failed to reach the blob service")]
    Http(#[from] reqwest::Error),

    #[error("Blob service rejected the request with status {status}")]
    Status { status: u16, body: String },

    #[error("Storage account key is not valid base64")]
    InvalidKey(#[from] base64::DecodeError),

    #[error("Storage account key cannot be used for signing")]
    KeyLength(#[from] hmac::digest::InvalidLength),

    #[error("Blob endpoint is not a valid URL")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Trait for storing binary objects by name inside a single container.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `data` under `blob_name`. An existing object with the same name is replaced.
    async fn put_blob(&self, blob_name: &str, data: &[u8]) -> BlobResult<()>;

    /// The address a stored object is served from. Computed from configuration only;
    /// it does not check that the object exists.
    fn public_url(&self, blob_name: &str) -> String;
}
