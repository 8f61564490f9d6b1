#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

//! # Tracker
//!
//! Core library for a small task tracker whose storage layer went through
//! three shapes as the deployment story changed:
//!
//! - [`MemoryStorage`]: tasks live in process memory. Fast and simple, but
//!   everything is gone on restart and two instances never see each other's
//!   data.
//! - [`FileStorage`]: tasks persist in a single JSON file. Survives
//!   restarts; still tied to one machine, and concurrent writers from other
//!   processes are not coordinated.
//! - [`JsonBinStorage`]: tasks live in a hosted JSON bin (jsonbin.io), so
//!   the service itself is stateless and any instance can serve any request.
//!   Concurrent read-modify-write cycles from several instances still race.
//!
//! All three implement the [`Storage`] trait (whole-list load/save);
//! [`TaskService`] layers CRUD and id allocation on top and serializes
//! mutations within the process.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tracker::{CreateTask, MemoryStorage, TaskService, TaskStatus};
//!
//! let service = TaskService::new(Arc::new(MemoryStorage::new()));
//! let task = service
//!     .create_task(CreateTask { title: "write docs".into(), status: TaskStatus::Pending })
//!     .await?;
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Storage layer
pub mod storage;

// CRUD service on top of storage
pub mod service;

// Re-export key types for convenience
pub use entities::{CreateTask, Task, TaskStatus, UpdateTask};
pub use errors::{TrackerError, TrackerResult};
pub use service::TaskService;
pub use storage::{FileStorage, JsonBinStorage, MemoryStorage, Storage, StorageConfig};
