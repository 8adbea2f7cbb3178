use std::path::Path;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use rocksdb::{IteratorMode, Options, DB};
use crate::record::MessageRecord;
use crate::store::{DocumentStore, InsertOutcome, StoreResult};

/// A `DocumentStore` backed by a single local RocksDB database.
/// Keys are record ids, values are the JSON documents.
pub struct RocksDocumentStore {
    db: Arc<DB>,
    // get + put must not interleave between two inserts
    insert_lock: Mutex<()>,
}

impl RocksDocumentStore {
    pub fn open<P: AsRef<Path>>(db_path: P) -> StoreResult<Self> {
        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        let db = DB::open(&db_opts, db_path)?;
        Ok(Self { db: Arc::new(db), insert_lock: Mutex::new(()) })
    }
}

#[async_trait]
impl DocumentStore for RocksDocumentStore {
    async fn insert(&self, record: &MessageRecord) -> StoreResult<InsertOutcome> {
        let key = record.id.to_string();
        let value = serde_json::to_vec(record)?;

        let _guard = self.insert_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.db.get(&key)?.is_some() {
            return Ok(InsertOutcome::AlreadyExists);
        }
        self.db.put(&key, value)?;
        Ok(InsertOutcome::Inserted)
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<MessageRecord>> {
        let mut records = Vec::new();
        for res in self.db.iterator(IteratorMode::Start).take(limit) {
            let (_, val) = res?;
            records.push(serde_json::from_slice(&val)?);
        }
        Ok(records)
    }
}
