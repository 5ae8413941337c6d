//! Handlers for the legacy `/status` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_db::models::status_check::{CreateStatusCheck, StatusCheck};
use folio_db::repositories::StatusCheckRepo;

use crate::error::{AppResult, StoreResultExt};
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /api/status
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateStatusCheck>,
) -> AppResult<(StatusCode, Json<StatusCheck>)> {
    let check = StatusCheckRepo::create(state.store.as_ref(), &input)
        .await
        .context("creating status check")?;
    tracing::info!(status_check_id = %check.id, client_name = %check.client_name, "Status check recorded");
    Ok((StatusCode::CREATED, Json(check)))
}

/// GET /api/status
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StatusCheck>>> {
    let checks = StatusCheckRepo::list(state.store.as_ref())
        .await
        .context("fetching status checks")?;
    Ok(Json(checks))
}
