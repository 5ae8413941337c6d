//! PostgreSQL-backed [`DocumentStore`].
//!
//! All collections share the `documents` table; a document's body is a JSONB
//! object and its key is the table's native `UUID` column.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::store::{
    DeleteResult, Document, DocumentStore, FindOptions, InsertOneResult, Sort, StoredDocument,
    UpdateResult,
};
use crate::StoreError;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_document(row: PgRow) -> Result<StoredDocument, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let Json(body): Json<Value> = row.try_get("body")?;
    match body {
        Value::Object(body) => Ok(StoredDocument { id, body }),
        other => Err(StoreError::Malformed(format!(
            "document {id} has a non-object body: {other}"
        ))),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(
        &self,
        collection: &str,
        id: Uuid,
        body: Document,
    ) -> Result<InsertOneResult, StoreError> {
        let result = sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(id)
            .bind(Json(Value::Object(body)))
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOneResult { inserted_id: id }),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                Err(StoreError::DuplicateKey {
                    collection: collection.to_string(),
                    id,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_one(
        &self,
        collection: &str,
        id: Uuid,
    ) -> Result<Option<StoredDocument>, StoreError> {
        sqlx::query("SELECT id, body FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(row_to_document)
            .transpose()
    }

    async fn find_many(
        &self,
        collection: &str,
        options: &FindOptions,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT id, body FROM documents WHERE collection = ");
        query.push_bind(collection);

        if !options.filter.is_empty() {
            // Containment of a flat object is key-by-key equality for scalars.
            query
                .push(" AND body @> ")
                .push_bind(Json(Value::Object(options.filter.clone())));
        }

        if let Some(Sort::NewestFirst(field)) = options.sort {
            query
                .push(" ORDER BY (body ->> ")
                .push_bind(field)
                .push(")::timestamptz DESC");
        }

        query.push(" LIMIT ").push_bind(options.limit);

        query
            .build()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(row_to_document)
            .collect()
    }

    async fn update_one(
        &self,
        collection: &str,
        id: Uuid,
        set: Document,
    ) -> Result<UpdateResult, StoreError> {
        let result =
            sqlx::query("UPDATE documents SET body = body || $3 WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .bind(Json(Value::Object(set)))
                .execute(&self.pool)
                .await?;
        Ok(UpdateResult {
            matched_count: result.rows_affected(),
        })
    }

    async fn delete_one(&self, collection: &str, id: Uuid) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(DeleteResult {
            deleted_count: result.rows_affected(),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
