pub mod contact;
pub mod project;
pub mod root;
pub mod status;

use folio_core::error::CoreError;
use folio_core::types::RecordId;

use crate::error::AppResult;

/// Parse a path id. A malformed id is reported exactly like a missing one.
pub(crate) fn parse_record_id(entity: &'static str, raw: &str) -> AppResult<RecordId> {
    raw.parse()
        .map_err(|_| CoreError::not_found(entity, raw).into())
}

/// Plain `{ "message": ... }` acknowledgement body.
#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
