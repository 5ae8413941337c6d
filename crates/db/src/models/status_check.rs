//! Legacy status-check model. Field names stay snake_case on the wire for
//! older clients.

use folio_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: RecordId,
    pub client_name: String,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatusCheck {
    pub client_name: String,
}
