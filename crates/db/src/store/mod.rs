//! The document store contract.
//!
//! A store holds named collections of JSON object documents, each under a
//! native UUID key. The contract is the minimum the repositories need:
//! insert one, find one by key, find many with an equality filter, sort and
//! limit, merge a partial set into one document, delete one. Write results
//! report how many documents matched so callers can tell a miss from a hit.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use folio_core::MAX_LIST_RESULTS;
use serde_json::Value;
use uuid::Uuid;

use crate::StoreError;

/// A loosely-typed stored record body (never contains its own key).
pub type Document = serde_json::Map<String, Value>;

/// A document together with the store's native key for it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub body: Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOneResult {
    pub inserted_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: u64,
}

/// Result ordering for [`DocumentStore::find_many`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// Descending by an RFC 3339 timestamp field.
    NewestFirst(&'static str),
}

/// Query parameters for [`DocumentStore::find_many`].
///
/// With no filter every document in the collection matches. Without a sort
/// the order is whatever the store returns.
#[derive(Debug, Clone, PartialEq)]
pub struct FindOptions {
    pub filter: Document,
    pub sort: Option<Sort>,
    pub limit: i64,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            filter: Document::new(),
            sort: None,
            limit: MAX_LIST_RESULTS,
        }
    }
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only match documents whose `field` equals `value`.
    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter.insert(field.to_string(), value.into());
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Whether `body` satisfies every equality in the filter.
    pub fn matches(&self, body: &Document) -> bool {
        self.filter
            .iter()
            .all(|(field, expected)| body.get(field) == Some(expected))
    }
}

/// External persistence service for loosely-typed records.
///
/// One handle is created at process start and shared by all requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `body` under `id`. Fails if the key is already taken.
    async fn insert_one(
        &self,
        collection: &str,
        id: Uuid,
        body: Document,
    ) -> Result<InsertOneResult, StoreError>;

    async fn find_one(
        &self,
        collection: &str,
        id: Uuid,
    ) -> Result<Option<StoredDocument>, StoreError>;

    async fn find_many(
        &self,
        collection: &str,
        options: &FindOptions,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// Merge the keys of `set` into the document under `id`, leaving all
    /// other keys as they are.
    async fn update_one(
        &self,
        collection: &str,
        id: Uuid,
        set: Document,
    ) -> Result<UpdateResult, StoreError>;

    async fn delete_one(&self, collection: &str, id: Uuid) -> Result<DeleteResult, StoreError>;

    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release the underlying connection(s). Called once at shutdown.
    async fn close(&self);
}
