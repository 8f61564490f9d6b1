//! HTTP API for the task tracker.
//!
//! This crate provides:
//! - Configuration from environment variables (with `.env` support)
//! - The axum router and request handlers for task CRUD
//! - Error-to-response mapping with a uniform JSON error body
//! - The `tracker-api` service binary

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use error::ApiError;
pub use server::{build_router, AppState};
