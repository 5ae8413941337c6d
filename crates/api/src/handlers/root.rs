use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Service identity banner.
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: &'static str,
}

/// GET /api
pub async fn banner(State(state): State<AppState>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: state.config.api_title.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
