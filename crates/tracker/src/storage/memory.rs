//! In-memory storage implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Storage;
use crate::entities::Task;
use crate::errors::TrackerResult;

/// In-memory storage.
///
/// The first shape the tracker's storage took: a list behind a lock. State
/// is local to this process, so a restart drops every task and a second
/// instance of the service has its own empty list.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with tasks.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> TrackerResult<()> {
        Ok(())
    }

    fn storage_type(&self) -> &'static str {
        "memory"
    }

    async fn load_tasks(&self) -> TrackerResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn save_tasks(&self, tasks: &[Task]) -> TrackerResult<()> {
        *self.tasks.write().await = tasks.to_vec();
        Ok(())
    }
}
