//! # Taskboard API Server Library
//!
//! This library provides the core functionality for the Taskboard API
//! server: ownership-scoped CRUD over projects and the tasks nested
//! under them.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
