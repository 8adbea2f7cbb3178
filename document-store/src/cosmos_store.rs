use std::fmt;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;
use sha2::Sha256;
use crate::record::MessageRecord;
use crate::store::{DocumentStore, DocumentStoreError, InsertOutcome, StoreResult};

const API_VERSION: &str = "2018-12-31";

type HmacSha256 = Hmac<Sha256>;

/// The URL-encoded `authorization` header value for a master-key signed request.
fn master_key_token(
    master_key: &[u8],
    verb: &str,
    resource_type: &str,
    resource_link: &str,
    date: &str,
) -> StoreResult<String> {
    let payload = format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.to_lowercase(),
        resource_link,
        date.to_lowercase(),
    );
    let mut mac = HmacSha256::new_from_slice(master_key)?;
    mac.update(payload.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());
    let token = format!("type=master&ver=1.0&sig={}", signature);
    Ok(urlencoding::encode(&token).into_owned())
}

#[derive(Deserialize)]
struct DocumentFeed {
    #[serde(rename = "Documents")]
    documents: Vec<MessageRecord>,
}

/// A `DocumentStore` talking to one Cosmos DB container over the SQL REST API,
/// authorized with the account master key.
#[derive(Clone)]
pub struct CosmosDocumentStore {
    client: reqwest::Client,
    account_url: String,
    master_key: Vec<u8>,
    collection_link: String,
    partition_key: Option<String>,
}

impl fmt::Debug for CosmosDocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CosmosDocumentStore")
            .field("account_url", &self.account_url)
            .field("collection_link", &self.collection_link)
            .field("partition_key", &self.partition_key)
            .finish_non_exhaustive()
    }
}

impl CosmosDocumentStore {
    /// `partition_key` names the top-level record field the container is partitioned on.
    pub fn new(
        account_url: &str,
        master_key: &str,
        database_id: &str,
        container_id: &str,
        partition_key: Option<String>,
    ) -> StoreResult<Self> {
        Ok(Self {
            client: reqwest::Client::default(),
            account_url: account_url.trim_end_matches('/').to_string(),
            master_key: STANDARD.decode(master_key.trim())?,
            collection_link: format!("dbs/{}/colls/{}", database_id, container_id),
            partition_key,
        })
    }

    fn docs_url(&self) -> String {
        format!("{}/{}/docs", self.account_url, self.collection_link)
    }

    fn authorization(&self, verb: &str, date: &str) -> StoreResult<String> {
        master_key_token(&self.master_key, verb, "docs", &self.collection_link, date)
    }

    fn signed(&self, request: reqwest::RequestBuilder, verb: &str) -> StoreResult<reqwest::RequestBuilder> {
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let authorization = self.authorization(verb, &date)?;
        Ok(request
            .header("x-ms-date", date)
            .header("x-ms-version", API_VERSION)
            .header(AUTHORIZATION, authorization))
    }

    fn partition_key_header(&self, record: &MessageRecord) -> StoreResult<Option<String>> {
        let Some(field) = &self.partition_key else {
            return Ok(None);
        };
        let document = serde_json::to_value(record)?;
        let value = document.get(field).cloned().unwrap_or(serde_json::Value::Null);
        Ok(Some(serde_json::to_string(&[value])?))
    }
}

async fn status_error(response: reqwest::Response) -> DocumentStoreError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    DocumentStoreError::Status { status, body }
}

#[async_trait]
impl DocumentStore for CosmosDocumentStore {
    async fn insert(&self, record: &MessageRecord) -> StoreResult<InsertOutcome> {
        let mut request = self.signed(self.client.post(self.docs_url()), "POST")?.json(record);
        if let Some(partition_key) = self.partition_key_header(record)? {
            request = request.header("x-ms-documentdb-partitionkey", partition_key);
        }

        tracing::debug!("creating document {}", record.id);
        let response = request.send().await?;
        match response.status() {
            StatusCode::CREATED => Ok(InsertOutcome::Inserted),
            StatusCode::CONFLICT => Ok(InsertOutcome::AlreadyExists),
            _ => Err(status_error(response).await),
        }
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<MessageRecord>> {
        let request = self.signed(self.client.get(self.docs_url()), "GET")?
            .header("x-ms-max-item-count", limit.to_string());

        tracing::debug!("reading up to {} documents", limit);
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        let mut feed: DocumentFeed = response.json().await?;
        feed.documents.truncate(limit);
        Ok(feed.documents)
    }
}
