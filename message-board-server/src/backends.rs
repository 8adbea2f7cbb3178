use std::sync::Arc;
use blob_store::{AzureBlobStore, BlobStore, LocalFileBlobStore};
use document_store::{CosmosDocumentStore, DocumentStore, MemoryDocumentStore, RocksDocumentStore};
use tokio::fs;
use crate::errors::BoardErr;
use crate::params::{Args, BlobBackend, DocumentBackend};
use crate::state::AppState;
use crate::views::Views;

fn required<'a>(value: &'a Option<String>, setting: &'static str) -> Result<&'a str, BoardErr> {
    value.as_deref().filter(|v| !v.is_empty()).ok_or(BoardErr::MissingSetting(setting))
}

pub async fn blob_store(args: &Args) -> Result<Arc<dyn BlobStore>, BoardErr> {
    match args.blob_backend {
        BlobBackend::Azure => {
            let account = required(&args.storage_account, "APPSETTING_STORAGE_ACCOUNT")?;
            let key = required(&args.conn_key, "APPSETTING_CONN_KEY")?;
            tracing::info!("storing images in Azure container {}/{}", account, args.images_container);
            let store = AzureBlobStore::new(account, key, &args.images_container, args.blob_endpoint.as_deref())?;
            Ok(Arc::new(store))
        }
        BlobBackend::Local => {
            fs::create_dir_all(&args.local_blob_dir).await?;
            tracing::info!("storing images in {}", args.local_blob_dir.display());
            Ok(Arc::new(LocalFileBlobStore::new(&args.local_blob_dir, &args.local_blob_url)))
        }
    }
}

pub fn document_store(args: &Args) -> Result<Arc<dyn DocumentStore>, BoardErr> {
    match args.document_backend {
        DocumentBackend::Cosmos => {
            let url = required(&args.cosmos_url, "APPSETTING_COSMOS_URL")?;
            let key = required(&args.master_key, "APPSETTING_MasterKey")?;
            tracing::info!("storing messages in Cosmos container {}/{}", args.database_id, args.container_id);
            let store = CosmosDocumentStore::new(
                url,
                key,
                &args.database_id,
                &args.container_id,
                Some(args.partition_key.clone()),
            )?;
            Ok(Arc::new(store))
        }
        DocumentBackend::Rocksdb => {
            tracing::info!("storing messages in {}", args.rocksdb_path.display());
            Ok(Arc::new(RocksDocumentStore::open(&args.rocksdb_path)?))
        }
        DocumentBackend::Memory => {
            tracing::warn!("storing messages in memory, they are lost on restart");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}

pub async fn build_state(args: &Args) -> Result<AppState, BoardErr> {
    fs::create_dir_all(&args.staging_dir).await?;
    Ok(AppState {
        blob_store: blob_store(args).await?,
        document_store: document_store(args)?,
        staging_dir: args.staging_dir.clone(),
        max_field_bytes: args.max_field_bytes,
        views: Views::new()?,
    })
}
