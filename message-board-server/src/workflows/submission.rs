use std::path::Path;
use blob_store::BlobStore;
use document_store::{DocumentStore, InsertOutcome, MessageRecord};
use tokio::fs;
use crate::errors::BoardErr;
use crate::form::{Attachment, SubmissionForm};

/// Result of one accepted submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// The text as submitted; the confirmation page shows this
    pub message: String,
    pub record: MessageRecord,
    pub outcome: InsertOutcome,
}

/// Records one form submission: stage and upload the image if there is one,
/// then write the message record.
///
/// The upload always finishes before the insert starts, since the record carries
/// the image URL. If the insert fails the uploaded blob stays behind.
pub struct SubmissionWorkflow<'a> {
    blob_store: &'a dyn BlobStore,
    document_store: &'a dyn DocumentStore,
    staging_dir: &'a Path,
}

impl<'a> SubmissionWorkflow<'a> {
    pub fn new(
        blob_store: &'a dyn BlobStore,
        document_store: &'a dyn DocumentStore,
        staging_dir: &'a Path,
    ) -> Self {
        Self { blob_store, document_store, staging_dir }
    }

    pub async fn submit(&self, form: SubmissionForm) -> Result<Submission, BoardErr> {
        let message = form.msg.unwrap_or_default();
        let image_url = match &form.file {
            Some(attachment) => Some(self.store_image(attachment).await?),
            None => None,
        };

        let record = MessageRecord::new(message.clone(), image_url);
        let outcome = self.document_store.insert(&record).await?;
        match outcome {
            InsertOutcome::Inserted => {
                tracing::info!("stored message {} (image attached: {})", record.id, record.image_url.is_some());
            }
            InsertOutcome::AlreadyExists => {
                tracing::warn!("message {} already exists, didn't insert it", record.id);
            }
        }

        Ok(Submission { message, record, outcome })
    }

    /// Writes the upload to the staging directory, then pushes the staged file to the
    /// blob store. Same-name uploads overwrite each other in both places.
    async fn store_image(&self, attachment: &Attachment) -> Result<String, BoardErr> {
        let staged = self.staging_dir.join(&attachment.filename);
        fs::write(&staged, &attachment.data).await?;

        let data = fs::read(&staged).await?;
        self.blob_store.put_blob(&attachment.filename, &data).await?;
        Ok(self.blob_store.public_url(&attachment.filename))
    }
}
