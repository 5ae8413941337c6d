//! Record <-> document conversion at the persistence boundary.
//!
//! Records carry their client-facing `id`; stored bodies never do. The key
//! travels separately as the store's native UUID.

use folio_core::types::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::store::{Document, StoredDocument};
use crate::StoreError;

const ID_KEY: &str = "id";

/// Serialize `record` into a document body, dropping its `id`.
pub(crate) fn to_document<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(mut body) => {
            body.remove(ID_KEY);
            Ok(body)
        }
        other => Err(StoreError::Malformed(format!(
            "record did not serialize to an object: {other}"
        ))),
    }
}

/// Rebuild a record from a stored document, restoring `id` from the key.
pub(crate) fn from_document<T: DeserializeOwned>(stored: StoredDocument) -> Result<T, StoreError> {
    let StoredDocument { id, mut body } = stored;
    body.insert(
        ID_KEY.to_string(),
        Value::String(RecordId::from(id).to_string()),
    );
    Ok(serde_json::from_value(Value::Object(body))?)
}

/// Serialize `value` into `set` under `key`.
pub(crate) fn set_field<T: Serialize>(
    set: &mut Document,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    set.insert(key.to_string(), serde_json::to_value(value)?);
    Ok(())
}
