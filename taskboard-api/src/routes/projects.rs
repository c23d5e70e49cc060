/// Project endpoints
///
/// CRUD over projects, scoped to the authenticated caller. Direct
/// project access distinguishes "missing" (404) from "not yours" (403);
/// contrast with the nested task routes, which collapse the two.
///
/// # Endpoints
///
/// - `GET    /projects` - List own projects
/// - `POST   /projects` - Create project
/// - `GET    /projects/:project_id` - Get a single project
/// - `PUT    /projects/:project_id` - Partial update
/// - `DELETE /projects/:project_id` - Delete project (and its tasks)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::middleware::AuthContext,
    models::project::{CreateProject, Project, UpdateProject},
};
use uuid::Uuid;
use validator::Validate;

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project name (required, non-empty)
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Project name is required"))]
    pub name: String,

    /// Optional description
    pub description: Option<String>,
}

/// Update project request
///
/// Omitted (or null) fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    /// New project name
    #[validate(length(min = 1, max = 255, message = "Project name must be non-empty"))]
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,
}

/// List projects response
#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    /// Projects owned by the caller, oldest first
    pub projects: Vec<Project>,
}

/// Delete project response
#[derive(Debug, Serialize)]
pub struct DeleteProjectResponse {
    /// Whether the project was deleted
    pub deleted: bool,

    /// Confirmation message
    pub message: String,
}

/// List projects
///
/// Returns every project owned by the caller, ordered by ascending
/// creation time. Always succeeds; an empty list is a valid answer.
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Database error
pub async fn list_projects(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<ListProjectsResponse>> {
    let projects = Project::list_by_owner(&state.db, auth.user_id).await?;

    Ok(Json(ListProjectsResponse { projects }))
}

/// Get a single project by id
///
/// Unlike the nested task routes, this endpoint tells "missing" and
/// "not yours" apart: a project that exists but belongs to someone else
/// is a 403, not a 404.
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `403 Forbidden`: Project exists but the caller is not the owner
/// - `404 Not Found`: No project with this id
/// - `500 Internal Server Error`: Database error
pub async fn get_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    let project = Project::find_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project with id {} not found", project_id)))?;

    if !project.is_owned_by(auth.user_id) {
        return Err(ApiError::Forbidden(
            "User is not authorized to view this project".to_string(),
        ));
    }

    Ok(Json(project))
}

/// Create a project
///
/// The caller becomes the owner; ownership is fixed for the project's
/// lifetime.
///
/// # Errors
///
/// - `400 Bad Request`: Missing or empty name
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Database error
pub async fn create_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    req.validate()?;

    let project = Project::create(
        &state.db,
        CreateProject {
            owner_id: auth.user_id,
            name: req.name,
            description: req.description,
        },
    )
    .await?;

    tracing::info!(
        project_id = %project.id,
        owner_id = %auth.user_id,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// Update a project
///
/// Partial update: any supplied field replaces the stored value, any
/// omitted field is left unchanged.
///
/// # Errors
///
/// - `400 Bad Request`: Supplied name is empty
/// - `401 Unauthorized`: Missing or invalid token
/// - `403 Forbidden`: Project exists but the caller is not the owner
/// - `404 Not Found`: No project with this id
/// - `500 Internal Server Error`: Database error
pub async fn update_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<Project>> {
    req.validate()?;

    let project = Project::find_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project with id {} not found", project_id)))?;

    if !project.is_owned_by(auth.user_id) {
        return Err(ApiError::Forbidden(
            "User is not authorized to update this project".to_string(),
        ));
    }

    let updated = Project::update(
        &state.db,
        project_id,
        UpdateProject {
            name: req.name,
            description: req.description,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Project with id {} not found", project_id)))?;

    Ok(Json(updated))
}

/// Delete a project
///
/// Removal is immediate and unconditional; tasks under the project are
/// removed by the FK cascade. The response does not report whether the
/// project had tasks.
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `403 Forbidden`: Project exists but the caller is not the owner
/// - `404 Not Found`: No project with this id
/// - `500 Internal Server Error`: Database error
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<DeleteProjectResponse>> {
    let project = Project::find_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project with id {} not found", project_id)))?;

    if !project.is_owned_by(auth.user_id) {
        return Err(ApiError::Forbidden(
            "User is not authorized to delete this project".to_string(),
        ));
    }

    let deleted = Project::delete(&state.db, project_id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!(
            "Project with id {} not found",
            project_id
        )));
    }

    tracing::info!(
        project_id = %project_id,
        owner_id = %auth.user_id,
        "Project deleted"
    );

    Ok(Json(DeleteProjectResponse {
        deleted: true,
        message: "Project deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_missing_name() {
        // serde(default) turns an absent name into an empty string,
        // which the length validator then refuses
        let req: CreateProjectRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req: CreateProjectRequest =
            serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_name_only() {
        let req: CreateProjectRequest =
            serde_json::from_str(r#"{"name": "Trip"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.name, "Trip");
        assert!(req.description.is_none());
    }

    #[test]
    fn test_update_request_allows_empty_body() {
        let req: UpdateProjectRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.name.is_none());
        assert!(req.description.is_none());
    }

    #[test]
    fn test_update_request_rejects_empty_name() {
        let req: UpdateProjectRequest =
            serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_null_name_means_unchanged() {
        let req: UpdateProjectRequest =
            serde_json::from_str(r#"{"name": null, "description": "x"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.name.is_none());
        assert_eq!(req.description.as_deref(), Some("x"));
    }
}
