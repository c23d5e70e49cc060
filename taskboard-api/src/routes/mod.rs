/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `projects`: Project CRUD, scoped to the owning user
/// - `tasks`: Task CRUD, nested under an owned project

pub mod health;
pub mod projects;
pub mod tasks;
