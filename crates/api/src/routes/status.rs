use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Legacy routes mounted at `/status`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(status::list).post(status::create))
}
