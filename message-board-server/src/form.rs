use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use crate::errors::BoardErr;

/// An uploaded file, keyed by the last `/`-separated part of its original name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub data: Vec<u8>,
}

impl Attachment {
    /// Browsers send an empty filename when no file was picked; that is no attachment.
    pub fn new(original_name: &str, data: Vec<u8>) -> Option<Self> {
        let filename = original_name.rsplit('/').next().unwrap_or_default();
        if filename.is_empty() {
            return None;
        }
        Some(Self { filename: filename.to_string(), data })
    }
}

/// The fields of a `/handle_message` submission. Both are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub msg: Option<String>,
    pub file: Option<Attachment>,
}

impl SubmissionForm {
    pub fn text(msg: impl Into<String>) -> Self {
        Self { msg: Some(msg.into()), file: None }
    }

    /// Reads every field of the stream. A field longer than `max_field_bytes` fails the form.
    /// The first `file` field with a usable filename wins.
    pub async fn from_multipart(mut payload: Multipart, max_field_bytes: usize) -> Result<Self, BoardErr> {
        let mut form = SubmissionForm::default();
        while let Some(mut field) = payload.try_next().await? {
            let disposition = field.content_disposition().cloned();
            let name = disposition.as_ref().and_then(|cd| cd.get_name()).unwrap_or_default().to_string();
            let filename = disposition.as_ref().and_then(|cd| cd.get_filename()).unwrap_or_default().to_string();

            let mut data = Vec::new();
            while let Some(chunk) = field.try_next().await? {
                if data.len() + chunk.len() > max_field_bytes {
                    return Err(BoardErr::TooLarge(max_field_bytes));
                }
                data.extend_from_slice(&chunk);
            }

            match name.as_str() {
                "msg" => form.msg = Some(String::from_utf8_lossy(&data).into_owned()),
                "file" if form.file.is_none() => form.file = Attachment::new(&filename, data),
                "file" => tracing::debug!("ignoring extra file field {:?}", filename),
                _ => tracing::debug!("ignoring form field {:?}", name),
            }
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_uses_last_path_component() {
        let attachment = Attachment::new("photos/2024/cat.png", b"png".to_vec()).unwrap();
        assert_eq!(attachment.filename, "cat.png");
        assert_eq!(Attachment::new("cat.png", Vec::new()).unwrap().filename, "cat.png");
    }

    #[test]
    fn test_empty_filename_is_no_attachment() {
        assert_eq!(Attachment::new("", b"ignored".to_vec()), None);
        assert_eq!(Attachment::new("photos/", b"ignored".to_vec()), None);
    }
}
