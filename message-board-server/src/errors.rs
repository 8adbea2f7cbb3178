use actix_multipart::MultipartError;
use actix_web::{HttpResponse, ResponseError};
use blob_store::BlobStoreError;
use document_store::DocumentStoreError;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum BoardErr {
    #[error("Failed to read the submitted form")]
    Form(#[from] MultipartError),

    #[error("Failed to stage the uploaded image")]
    Staging(#[from] std::io::Error),

    #[error("Failed to upload the image")]
    Blob(#[from] BlobStoreError),

    #[error("Failed to reach the message store")]
    Document(#[from] DocumentStoreError),

    #[error("Failed to render the page")]
    Render(#[from] minijinja::Error),

    #[error("Form field is larger than {0} bytes")]
    TooLarge(usize),

    #[error("Missing required setting {0}")]
    MissingSetting(&'static str),
}

impl ResponseError for BoardErr {
    fn error_response(&self) -> HttpResponse {
        tracing::error!("{}: {:?}", self, self);
        match self {
            BoardErr::Form(_) => HttpResponse::BadRequest().body(self.to_string()),
            BoardErr::TooLarge(_) => HttpResponse::PayloadTooLarge().body(self.to_string()),
            _ => HttpResponse::InternalServerError().body(self.to_string()),
        }
    }
}
