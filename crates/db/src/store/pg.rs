//! PostgreSQL document adapter.
//!
//! Each entity persists as one JSONB row in the `documents` table, keyed by
//! `(collection, id)`. Saves are upserts, so replace semantics match the
//! in-memory store.

use std::marker::PhantomData;

use async_trait::async_trait;

use super::{Collection, Document, StoreError};
use crate::DbPool;

pub struct PgCollection<T> {
    pool: DbPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PgCollection<T> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Document> Collection<T> for PgCollection<T> {
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let rows: Vec<(serde_json::Value,)> =
            sqlx::query_as("SELECT doc FROM documents WHERE collection = $1 ORDER BY id")
                .bind(T::COLLECTION)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|(doc,)| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT doc FROM documents WHERE collection = $1 AND id = $2")
                .bind(T::COLLECTION)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(doc,)| serde_json::from_value(doc).map_err(StoreError::from))
            .transpose()
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM documents WHERE collection = $1 AND id = $2)",
        )
        .bind(T::COLLECTION)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn save(&self, entity: &T) -> Result<(), StoreError> {
        let doc = serde_json::to_value(entity)?;
        sqlx::query(
            "INSERT INTO documents (collection, id, doc) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (collection, id) \
             DO UPDATE SET doc = EXCLUDED.doc, updated_at = now()",
        )
        .bind(T::COLLECTION)
        .bind(entity.id())
        .bind(&doc)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(T::COLLECTION)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
