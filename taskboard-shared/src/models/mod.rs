/// Database models for Taskboard
///
/// This module contains the two entities and their CRUD operations.
///
/// # Models
///
/// - `project`: Projects owned by a single user
/// - `task`: Tasks nested under a project; no owner of their own
///
/// Users are not modeled here: identity lives with the external
/// provider, and only the owner's `Uuid` is stored on a project.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::project::{CreateProject, Project};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let project = Project::create(&pool, CreateProject {
///     owner_id: Uuid::new_v4(),
///     name: "Trip".to_string(),
///     description: None,
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod project;
pub mod task;
