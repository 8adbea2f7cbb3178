pub mod azure_store;
pub mod local_store;
pub mod store;

pub use azure_store::AzureBlobStore;
pub use local_store::LocalFileBlobStore;
pub use store::{BlobResult, BlobStore, BlobStoreError};
