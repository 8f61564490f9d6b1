//! Storage layer for task persistence.
//!
//! Three backends implement [`Storage`], one per stage of the deployment
//! story: process memory, a local JSON file, and a hosted JSON bin. The
//! trait deliberately exposes only whole-list `load`/`save`, since every
//! medium here is a single JSON document; task-level operations belong to
//! [`crate::service::TaskService`].

mod file;
mod jsonbin;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::Task;
use crate::errors::{TrackerError, TrackerResult};

pub use file::FileStorage;
pub use jsonbin::JsonBinStorage;
pub use memory::MemoryStorage;

/// A place tasks are kept between requests.
///
/// Implementations are not expected to coordinate concurrent
/// read-modify-write cycles across processes; callers that need a
/// consistent cycle within one process must serialize it themselves
/// (the task service does).
#[async_trait]
pub trait Storage: Send + Sync {
    /// Prepare the backend for use (create files, directories, ...).
    async fn initialize(&self) -> TrackerResult<()>;

    /// Short backend identifier for logs and readiness reporting.
    fn storage_type(&self) -> &'static str;

    /// Load the full task list.
    async fn load_tasks(&self) -> TrackerResult<Vec<Task>>;

    /// Replace the full task list.
    async fn save_tasks(&self, tasks: &[Task]) -> TrackerResult<()>;
}

/// Backend selection, typically parsed from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Tasks live in process memory and vanish on restart.
    Memory,
    /// Tasks live in a JSON file at the given path.
    File { path: String },
    /// Tasks live in a hosted jsonbin.io bin.
    JsonBin {
        api_key: String,
        bin_id: String,
        base_url: String,
    },
}

/// Build a storage backend from its configuration.
pub fn from_config(config: &StorageConfig) -> TrackerResult<Arc<dyn Storage>> {
    match config {
        StorageConfig::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageConfig::File { path } => Ok(Arc::new(FileStorage::new(path))),
        StorageConfig::JsonBin {
            api_key,
            bin_id,
            base_url,
        } => {
            if api_key.is_empty() {
                return Err(TrackerError::Config(
                    "jsonbin storage requires an API key".to_string(),
                ));
            }
            if bin_id.is_empty() {
                return Err(TrackerError::Config(
                    "jsonbin storage requires a bin id".to_string(),
                ));
            }
            Ok(Arc::new(
                JsonBinStorage::new(api_key, bin_id)?.with_base_url(base_url),
            ))
        }
    }
}
