//! Repository for the `contacts` collection.

use folio_core::contact::STATUS_NEW;
use folio_core::types::{self, RecordId};

use crate::document::{from_document, to_document};
use crate::models::contact::{Contact, CreateContact};
use crate::store::{DocumentStore, FindOptions, Sort};
use crate::StoreError;

pub const COLLECTION: &str = "contacts";

pub struct ContactRepo;

impl ContactRepo {
    /// Persist a new submission with a fresh id, status `new` and the
    /// current time, returning the stored record.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &CreateContact,
    ) -> Result<Contact, StoreError> {
        let contact = Contact {
            id: RecordId::new(),
            name: input.name.clone(),
            email: input.email.clone(),
            subject: input.subject.clone(),
            message: input.message.clone(),
            status: STATUS_NEW.to_string(),
            created_at: types::now(),
        };

        let inserted = store
            .insert_one(COLLECTION, contact.id.into(), to_document(&contact)?)
            .await?;

        Self::find_by_id(store, contact.id)
            .await?
            .ok_or_else(|| StoreError::MissingAfterWrite {
                collection: COLLECTION.to_string(),
                id: inserted.inserted_id,
            })
    }

    /// All submissions, newest first, capped at the list limit.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Contact>, StoreError> {
        let options = FindOptions::new().sort(Sort::NewestFirst("createdAt"));
        store
            .find_many(COLLECTION, &options)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: RecordId,
    ) -> Result<Option<Contact>, StoreError> {
        store
            .find_one(COLLECTION, id.into())
            .await?
            .map(from_document)
            .transpose()
    }
}
