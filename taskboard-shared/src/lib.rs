//! # Taskboard Shared Library
//!
//! This crate contains shared types and business logic used by the
//! Taskboard API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models (projects, tasks) and their CRUD operations
//! - `auth`: JWT validation and the authentication middleware
//! - `db`: Connection pool management and migrations

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
