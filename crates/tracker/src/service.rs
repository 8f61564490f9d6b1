//! Task service providing task-level operations over a storage backend.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::entities::{CreateTask, Task, UpdateTask};
use crate::errors::{TrackerError, TrackerResult};
use crate::storage::Storage;

/// High-level task operations over a [`Storage`] backend.
///
/// Backends only move whole lists, so every mutation is a read-modify-write
/// cycle. The service serializes those cycles behind one async mutex, which
/// keeps concurrent requests inside this process from overwriting each
/// other. Nothing coordinates separate processes sharing a file or a bin.
pub struct TaskService {
    storage: Arc<dyn Storage>,
    write_lock: Mutex<()>,
}

impl TaskService {
    /// Create a task service over the given storage backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Short identifier of the underlying backend.
    pub fn storage_type(&self) -> &'static str {
        self.storage.storage_type()
    }

    /// List every task.
    pub async fn list_tasks(&self) -> TrackerResult<Vec<Task>> {
        self.storage.load_tasks().await
    }

    /// Fetch one task by id.
    pub async fn get_task(&self, id: u64) -> TrackerResult<Task> {
        let tasks = self.storage.load_tasks().await?;
        tasks
            .into_iter()
            .find(|task| task.id == id)
            .ok_or(TrackerError::TaskNotFound { id })
    }

    /// Create a task, assigning one past the highest existing id.
    pub async fn create_task(&self, request: CreateTask) -> TrackerResult<Task> {
        let _guard = self.write_lock.lock().await;

        let mut tasks = self.storage.load_tasks().await?;
        let id = match tasks.iter().map(|task| task.id).max() {
            Some(max) => max.checked_add(1).ok_or(TrackerError::IdExhausted)?,
            None => 1,
        };

        let task = Task::new(id, request.title, request.status);
        tasks.push(task.clone());
        self.storage.save_tasks(&tasks).await?;

        Ok(task)
    }

    /// Replace a task's title and status.
    pub async fn update_task(&self, id: u64, request: UpdateTask) -> TrackerResult<Task> {
        let _guard = self.write_lock.lock().await;

        let mut tasks = self.storage.load_tasks().await?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TrackerError::TaskNotFound { id })?;

        task.title = request.title;
        task.status = request.status;
        let updated = task.clone();

        self.storage.save_tasks(&tasks).await?;
        Ok(updated)
    }

    /// Delete a task by id.
    pub async fn delete_task(&self, id: u64) -> TrackerResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut tasks = self.storage.load_tasks().await?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(TrackerError::TaskNotFound { id });
        }

        self.storage.save_tasks(&tasks).await?;
        Ok(())
    }
}
