//! Handlers for the `/contact` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::contact::{Contact, CreateContact};
use folio_db::repositories::ContactRepo;

use crate::error::{AppResult, StoreResultExt};
use crate::extract::ApiJson;
use crate::handlers::parse_record_id;
use crate::state::AppState;

const ENTITY: &str = "Contact";

/// POST /api/contact
///
/// Validates every field before anything is written.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    input.validate()?;

    let contact = ContactRepo::create(state.store.as_ref(), &input)
        .await
        .context("creating contact")?;

    tracing::info!(contact_id = %contact.id, subject = %contact.subject, "Contact created");

    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contact
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list(state.store.as_ref())
        .await
        .context("fetching contacts")?;
    Ok(Json(contacts))
}

/// GET /api/contact/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Contact>> {
    let id = parse_record_id(ENTITY, &raw_id)?;
    let contact = ContactRepo::find_by_id(state.store.as_ref(), id)
        .await
        .context("fetching contact")?
        .ok_or_else(|| CoreError::not_found(ENTITY, raw_id))?;
    Ok(Json(contact))
}
