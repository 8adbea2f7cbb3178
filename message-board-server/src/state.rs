use std::path::PathBuf;
use std::sync::Arc;
use blob_store::BlobStore;
use document_store::DocumentStore;
use crate::views::Views;
use crate::workflows::{ListingWorkflow, SubmissionWorkflow};

/// Everything a request handler needs. Built once at startup and shared read-only.
pub struct AppState {
    pub blob_store: Arc<dyn BlobStore>,
    pub document_store: Arc<dyn DocumentStore>,
    pub staging_dir: PathBuf,
    /// Upper bound on any one multipart field
    pub max_field_bytes: usize,
    pub views: Views,
}

impl AppState {
    pub fn submission(&self) -> SubmissionWorkflow<'_> {
        SubmissionWorkflow::new(self.blob_store.as_ref(), self.document_store.as_ref(), &self.staging_dir)
    }

    pub fn listing(&self) -> ListingWorkflow<'_> {
        ListingWorkflow::new(self.document_store.as_ref())
    }
}
