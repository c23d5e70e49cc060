/// Task endpoints
///
/// CRUD over tasks, nested under a project. Every handler first resolves
/// the project through the ownership resolver; a project that is missing
/// and a project owned by someone else produce the same 404, unlike
/// direct project access. This asymmetry is an observed contract of the
/// API and is kept on purpose.
///
/// Tasks themselves are addressed by the (task id, project id) compound
/// key, so a task reached through the wrong project is a plain 404 even
/// when the task id exists elsewhere.
///
/// # Endpoints
///
/// - `GET    /projects/:project_id/tasks` - List tasks
/// - `POST   /projects/:project_id/tasks` - Create task
/// - `GET    /projects/:project_id/tasks/:task_id` - Get a single task
/// - `PUT    /projects/:project_id/tasks/:task_id` - Partial update
/// - `DELETE /projects/:project_id/tasks/:task_id` - Delete task

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
    models::{
        project::Project,
        task::{CreateTask, Task, TaskStatus, UpdateTask},
    },
};
use uuid::Uuid;
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title (required, non-empty)
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Task title is required"))]
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial status; defaults to `todo` when omitted
    pub status: Option<TaskStatus>,
}

/// Update task request
///
/// Omitted (or null) fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New title
    #[validate(length(min = 1, max = 255, message = "Task title must be non-empty"))]
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<TaskStatus>,
}

/// List tasks response
#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    /// Tasks of the project, oldest first
    pub tasks: Vec<Task>,
}

/// Delete task response
#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    /// Whether the task was deleted
    pub deleted: bool,

    /// Confirmation message
    pub message: String,
}

/// Resolves a project the caller owns, or fails with the unified 404
///
/// Existence and authorization are deliberately merged here: the caller
/// learns nothing about projects that are not theirs.
async fn resolve_owned_project(
    state: &AppState,
    project_id: Uuid,
    user_id: Uuid,
) -> Result<Project, ApiError> {
    Project::find_owned(&state.db, project_id, user_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Project with id {} not found or not authorized",
                project_id
            ))
        })
}

/// List tasks of a project
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Project missing or not owned by the caller
/// - `500 Internal Server Error`: Database error
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<ListTasksResponse>> {
    let project = resolve_owned_project(&state, project_id, auth.user_id).await?;

    let tasks = Task::list_by_project(&state.db, project.id).await?;

    Ok(Json(ListTasksResponse { tasks }))
}

/// Get a single task by compound key
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Project missing/not owned, or no task with this id
///   under this project
/// - `500 Internal Server Error`: Database error
pub async fn get_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path((project_id, task_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<Task>> {
    let project = resolve_owned_project(&state, project_id, auth.user_id).await?;

    let task = Task::find_in_project(&state.db, task_id, project.id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Task with id {} not found in this project",
                task_id
            ))
        })?;

    Ok(Json(task))
}

/// Create a task under a project
///
/// # Errors
///
/// - `400 Bad Request`: Missing or empty title
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Project missing or not owned by the caller
/// - `500 Internal Server Error`: Database error
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    req.validate()?;

    let project = resolve_owned_project(&state, project_id, auth.user_id).await?;

    let task = Task::create(
        &state.db,
        CreateTask {
            project_id: project.id,
            title: req.title,
            description: req.description,
            status: req.status,
        },
    )
    .await?;

    tracing::info!(
        task_id = %task.id,
        project_id = %project.id,
        status = %task.status.as_str(),
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task
///
/// Partial update: any supplied field replaces the stored value, any
/// omitted field is left unchanged.
///
/// # Errors
///
/// - `400 Bad Request`: Supplied title is empty
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Project missing/not owned, or no task with this id
///   under this project
/// - `500 Internal Server Error`: Database error
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path((project_id, task_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate()?;

    let project = resolve_owned_project(&state, project_id, auth.user_id).await?;

    let task = Task::update(
        &state.db,
        task_id,
        project.id,
        UpdateTask {
            title: req.title,
            description: req.description,
            status: req.status,
        },
    )
    .await?
    .ok_or_else(|| {
        ApiError::NotFound(format!(
            "Task with id {} not found in this project",
            task_id
        ))
    })?;

    Ok(Json(task))
}

/// Delete a task
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Project missing/not owned, or no task with this id
///   under this project
/// - `500 Internal Server Error`: Database error
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path((project_id, task_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let project = resolve_owned_project(&state, project_id, auth.user_id).await?;

    let deleted = Task::delete(&state.db, task_id, project.id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!(
            "Task with id {} not found in this project",
            task_id
        )));
    }

    tracing::info!(
        task_id = %task_id,
        project_id = %project_id,
        "Task deleted"
    );

    Ok(Json(DeleteTaskResponse {
        deleted: true,
        message: "Task deleted successfully".to_string(),
    }))
}
