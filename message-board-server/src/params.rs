use std::path::PathBuf;
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BlobBackend {
    Azure,
    Local,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DocumentBackend {
    Cosmos,
    Rocksdb,
    Memory,
}

/// Every setting can also come from the environment (or a `.env` file).
#[derive(Parser, Debug)]
pub struct Args {
    #[clap(long, env = "HTTP_ADDR", default_value = "127.0.0.1:5000")]
    pub http_addr: String,
    /// Where uploads are written before they go to the blob store
    #[clap(long, env = "STAGING_DIR", default_value = "./static/images")]
    pub staging_dir: PathBuf,
    /// Largest accepted form field (message or image), in bytes
    #[clap(long, env = "MAX_FIELD_BYTES", default_value_t = 16 * 1024 * 1024)]
    pub max_field_bytes: usize,

    #[clap(long, value_enum, env = "BLOB_BACKEND", default_value = "azure")]
    pub blob_backend: BlobBackend,
    #[clap(long, env = "APPSETTING_STORAGE_ACCOUNT")]
    pub storage_account: Option<String>,
    #[clap(long, env = "APPSETTING_CONN_KEY", hide_env_values = true)]
    pub conn_key: Option<String>,
    #[clap(long, env = "IMAGES_CONTAINER", default_value = "images")]
    pub images_container: String,
    /// Overrides https://{account}.blob.core.windows.net
    #[clap(long, env = "BLOB_ENDPOINT")]
    pub blob_endpoint: Option<String>,
    #[clap(long, env = "LOCAL_BLOB_DIR", default_value = "./blob-data")]
    pub local_blob_dir: PathBuf,
    #[clap(long, env = "LOCAL_BLOB_URL", default_value = "http://127.0.0.1:5000/blobs")]
    pub local_blob_url: String,

    #[clap(long, value_enum, env = "DOCUMENT_BACKEND", default_value = "cosmos")]
    pub document_backend: DocumentBackend,
    #[clap(long, env = "APPSETTING_COSMOS_URL")]
    pub cosmos_url: Option<String>,
    #[clap(long, env = "APPSETTING_MasterKey", hide_env_values = true)]
    pub master_key: Option<String>,
    #[clap(long, env = "DATABASE_ID", default_value = "lab5messagesdb")]
    pub database_id: String,
    #[clap(long, env = "CONTAINER_ID", default_value = "lab5messages")]
    pub container_id: String,
    /// Record field the Cosmos container is partitioned on
    #[clap(long, env = "COSMOS_PARTITION_KEY", default_value = "id")]
    pub partition_key: String,
    #[clap(long, env = "ROCKSDB_PATH", default_value = "messages.db")]
    pub rocksdb_path: PathBuf,
}
