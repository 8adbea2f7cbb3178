pub mod cosmos_store;
pub mod memory_store;
pub mod record;
pub mod rocks_store;
pub mod store;

pub use cosmos_store::CosmosDocumentStore;
pub use memory_store::MemoryDocumentStore;
pub use record::MessageRecord;
pub use rocks_store::RocksDocumentStore;
pub use store::{DocumentStore, DocumentStoreError, InsertOutcome, StoreResult};
