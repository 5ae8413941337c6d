//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppResult, StoreResultExt};
use crate::extract::ApiJson;
use crate::handlers::{parse_record_id, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Project";

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;

    let project = ProjectRepo::create(state.store.as_ref(), &input)
        .await
        .context("creating project")?;

    tracing::info!(
        project_id = %project.id,
        title = %project.title,
        category = %project.category,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(state.store.as_ref())
        .await
        .context("fetching projects")?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = parse_record_id(ENTITY, &raw_id)?;
    let project = ProjectRepo::find_by_id(state.store.as_ref(), id)
        .await
        .context("fetching project")?
        .ok_or_else(|| CoreError::not_found(ENTITY, raw_id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// Applies only the fields present in the body and always refreshes
/// `updatedAt`. A project deleted between the write and the refetch is
/// reported as not found.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(input): ApiJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let id = parse_record_id(ENTITY, &raw_id)?;
    input.validate()?;

    let project = ProjectRepo::update(state.store.as_ref(), id, &input)
        .await
        .context("updating project")?
        .ok_or_else(|| CoreError::not_found(ENTITY, raw_id))?;

    tracing::info!(
        project_id = %project.id,
        fields = ?input.supplied_fields(),
        "Project updated"
    );

    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_record_id(ENTITY, &raw_id)?;
    let deleted = ProjectRepo::delete(state.store.as_ref(), id)
        .await
        .context("deleting project")?;

    if !deleted {
        return Err(CoreError::not_found(ENTITY, raw_id).into());
    }

    tracing::info!(project_id = %id, "Project deleted");

    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}

/// GET /api/projects/category/{category}
///
/// An unknown category is an empty list, not an error.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_category(state.store.as_ref(), &category)
        .await
        .context("fetching projects by category")?;
    Ok(Json(projects))
}
