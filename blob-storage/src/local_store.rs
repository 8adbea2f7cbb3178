use std::path::PathBuf;
use async_trait::async_trait;
use tokio::fs;
use crate::store::{BlobResult, BlobStore};

/// A `BlobStore` that keeps objects as plain files in one directory.
#[derive(Clone, Debug)]
pub struct LocalFileBlobStore {
    base_path: PathBuf,
    public_base_url: String,
}

impl LocalFileBlobStore {
    pub fn new(base_path: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for LocalFileBlobStore {
    async fn put_blob(&self, blob_name: &str, data: &[u8]) -> BlobResult<()> {
        let file_path = self.base_path.join(blob_name);
        tracing::debug!("writing blob to {}", file_path.display());
        // fs::write creates or truncates
        fs::write(file_path, data).await?;
        Ok(())
    }

    fn public_url(&self, blob_name: &str) -> String {
        format!("{}/{}", self.public_base_url, blob_name)
    }
}
