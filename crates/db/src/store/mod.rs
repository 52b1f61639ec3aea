//! Abstract document store.
//!
//! Replaces per-entity repository interfaces with one generic async
//! [`Collection`] trait, implemented by an in-memory map for tests and a
//! PostgreSQL JSONB adapter for production. Domain logic never sees which
//! one it is talking to.

mod mem;
mod pg;

pub use mem::MemCollection;
pub use pg::PgCollection;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use paddock_core::client::Client;
use paddock_core::horse::Horse;
use paddock_core::stock::StockItem;

use crate::DbPool;

/// An entity that can live in a document collection.
pub trait Document: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name the entity persists under.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

impl Document for Horse {
    const COLLECTION: &'static str = "horses";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for Client {
    const COLLECTION: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for StockItem {
    const COLLECTION: &'static str = "stock";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid stored document: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Point lookups, existence checks, full scans and whole-document writes.
///
/// `save` is insert-or-replace keyed by the document id; concurrent saves to
/// the same id resolve last-write-wins at the storage layer.
#[async_trait]
pub trait Collection<T: Document>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError>;

    async fn save(&self, entity: &T) -> Result<(), StoreError>;

    /// Returns `true` if a document was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}

/// The three collections the application works with.
#[derive(Clone)]
pub struct Store {
    pub horses: Arc<dyn Collection<Horse>>,
    pub clients: Arc<dyn Collection<Client>>,
    pub stock: Arc<dyn Collection<StockItem>>,
}

impl Store {
    /// A store backed by in-memory maps. Used by tests; holds no database.
    pub fn in_memory() -> Self {
        Self {
            horses: Arc::new(MemCollection::new()),
            clients: Arc::new(MemCollection::new()),
            stock: Arc::new(MemCollection::new()),
        }
    }

    /// A store backed by the `documents` table of the given pool.
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            horses: Arc::new(PgCollection::new(pool.clone())),
            clients: Arc::new(PgCollection::new(pool.clone())),
            stock: Arc::new(PgCollection::new(pool)),
        }
    }
}
