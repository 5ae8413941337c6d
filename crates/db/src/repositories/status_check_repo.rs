//! Repository for the legacy `status_checks` collection.

use folio_core::types::{self, RecordId};

use crate::document::{from_document, to_document};
use crate::models::status_check::{CreateStatusCheck, StatusCheck};
use crate::store::{DocumentStore, FindOptions};
use crate::StoreError;

pub const COLLECTION: &str = "status_checks";

pub struct StatusCheckRepo;

impl StatusCheckRepo {
    /// Persist a status check. The record is returned as built; there is no
    /// refetch.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &CreateStatusCheck,
    ) -> Result<StatusCheck, StoreError> {
        let check = StatusCheck {
            id: RecordId::new(),
            client_name: input.client_name.clone(),
            timestamp: types::now(),
        };
        store
            .insert_one(COLLECTION, check.id.into(), to_document(&check)?)
            .await?;
        Ok(check)
    }

    /// Up to the list limit, in no particular order.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<StatusCheck>, StoreError> {
        store
            .find_many(COLLECTION, &FindOptions::new())
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }
}
