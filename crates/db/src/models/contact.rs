//! Contact-form submission model and DTOs.

use folio_core::contact;
use folio_core::error::CoreError;
use folio_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for submitting the contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl CreateContact {
    pub fn validate(&self) -> Result<(), CoreError> {
        contact::validate_new(&self.name, &self.email, &self.subject, &self.message)
    }
}
