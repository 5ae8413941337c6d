pub mod contact;
pub mod health;
pub mod project;
pub mod status;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /                                   banner
///
/// POST   /contact                            create contact
/// GET    /contact                            list contacts
/// GET    /contact/{id}                       get contact
///
/// POST   /projects                           create project
/// GET    /projects                           list projects
/// GET    /projects/{id}                      get project
/// PUT    /projects/{id}                      update project
/// DELETE /projects/{id}                      delete project
/// GET    /projects/category/{category}       list projects by category
///
/// POST   /status                             create status check
/// GET    /status                             list status checks
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::banner))
        .nest("/contact", contact::router())
        .nest("/projects", project::router())
        .nest("/status", status::router())
}
