use std::fmt;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use sha2::Sha256;
use url::Url;
use crate::store::{BlobResult, BlobStore, BlobStoreError};

const API_VERSION: &str = "2021-08-06";
const BLOB_CONTENT_TYPE: &str = "application/octet-stream";

type HmacSha256 = Hmac<Sha256>;

/// The public blob endpoint of a storage account.
pub fn default_endpoint(account: &str) -> String {
    format!("https://{}.blob.core.windows.net", account)
}

/// AzureBlobStore writes block blobs through the Blob service REST API,
/// signing each request with the account's shared key.
#[derive(Clone)]
pub struct AzureBlobStore {
    client: reqwest::Client,
    account: String,
    account_key: Vec<u8>,
    container: String,
    endpoint: Url,
}

impl fmt::Debug for AzureBlobStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureBlobStore")
            .field("account", &self.account)
            .field("container", &self.container)
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl AzureBlobStore {
    /// `endpoint` overrides the account's public endpoint, e.g. for Azurite.
    pub fn new(
        account: impl Into<String>,
        account_key: &str,
        container: impl Into<String>,
        endpoint: Option<&str>,
    ) -> BlobResult<Self> {
        let account = account.into();
        let endpoint = match endpoint {
            Some(endpoint) => Url::parse(endpoint)?,
            None => Url::parse(&default_endpoint(&account))?,
        };
        Ok(Self {
            client: reqwest::Client::default(),
            account_key: STANDARD.decode(account_key.trim())?,
            account,
            container: container.into(),
            endpoint,
        })
    }

    fn blob_url(&self, blob_name: &str) -> Url {
        let mut url = self.endpoint.clone();
        // http(s) endpoints always have a path to extend
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&self.container).push(blob_name);
        }
        url
    }

    fn string_to_sign(&self, content_length: usize, date: &str, url: &Url) -> String {
        // Content-Length is signed as empty when zero
        let length = if content_length == 0 { String::new() } else { content_length.to_string() };
        let standard_headers = [
            "PUT", "", "", length.as_str(), "", BLOB_CONTENT_TYPE, "", "", "", "", "", "",
        ];
        format!(
            "{}\nx-ms-blob-type:BlockBlob\nx-ms-date:{}\nx-ms-version:{}\n/{}{}",
            standard_headers.join("\n"),
            date,
            API_VERSION,
            self.account,
            url.path(),
        )
    }

    fn authorization(&self, string_to_sign: &str) -> BlobResult<String> {
        let mut mac = HmacSha256::new_from_slice(&self.account_key)?;
        mac.update(string_to_sign.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());
        Ok(format!("SharedKey {}:{}", self.account, signature))
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn put_blob(&self, blob_name: &str, data: &[u8]) -> BlobResult<()> {
        let url = self.blob_url(blob_name);
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let authorization = self.authorization(&self.string_to_sign(data.len(), &date, &url))?;

        tracing::debug!("uploading {} bytes to {}", data.len(), url);
        let response = self.client
            .put(url)
            .header("x-ms-blob-type", "BlockBlob")
            .header("x-ms-date", date)
            .header("x-ms-version", API_VERSION)
            .header(CONTENT_TYPE, BLOB_CONTENT_TYPE)
            .header(AUTHORIZATION, authorization)
            .body(data.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BlobStoreError::Status { status: status.as_u16(), body });
        }
        Ok(())
    }

    fn public_url(&self, blob_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            self.container,
            blob_name,
        )
    }
}
