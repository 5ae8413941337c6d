//! In-process [`DocumentStore`] with the same observable behaviour as the
//! PostgreSQL store. Used by tests; nothing is persisted.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{
    DeleteResult, Document, DocumentStore, FindOptions, InsertOneResult, Sort, StoredDocument,
    UpdateResult,
};
use crate::StoreError;

type Collection = HashMap<Uuid, Document>;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, HashMap::len)
    }
}

fn timestamp_of(body: &Document, field: &str) -> Option<DateTime<FixedOffset>> {
    body.get(field)
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: &str,
        id: Uuid,
        body: Document,
    ) -> Result<InsertOneResult, StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(&id) {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                id,
            });
        }
        docs.insert(id, body);
        Ok(InsertOneResult { inserted_id: id })
    }

    async fn find_one(
        &self,
        collection: &str,
        id: Uuid,
    ) -> Result<Option<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(&id))
            .map(|body| StoredDocument {
                id,
                body: body.clone(),
            }))
    }

    async fn find_many(
        &self,
        collection: &str,
        options: &FindOptions,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut found: Vec<StoredDocument> = docs
            .iter()
            .filter(|(_, body)| options.matches(body))
            .map(|(id, body)| StoredDocument {
                id: *id,
                body: body.clone(),
            })
            .collect();

        if let Some(Sort::NewestFirst(field)) = options.sort {
            found.sort_by(|a, b| timestamp_of(&b.body, field).cmp(&timestamp_of(&a.body, field)));
        }

        found.truncate(usize::try_from(options.limit).unwrap_or(0));
        Ok(found)
    }

    async fn update_one(
        &self,
        collection: &str,
        id: Uuid,
        set: Document,
    ) -> Result<UpdateResult, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(body) = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(&id))
        else {
            return Ok(UpdateResult { matched_count: 0 });
        };
        body.extend(set);
        Ok(UpdateResult { matched_count: 1 })
    }

    async fn delete_one(&self, collection: &str, id: Uuid) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(&id))
            .is_some();
        Ok(DeleteResult {
            deleted_count: u64::from(removed),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}
