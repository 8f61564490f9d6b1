//! File-based storage implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::Storage;
use crate::entities::Task;
use crate::errors::{TrackerError, TrackerResult};

/// File-based storage.
///
/// Tasks persist in a single JSON file as a plain array, so they survive a
/// process restart. The file is still local to one machine, and nothing
/// here locks it against writers in other processes; two services sharing
/// the path can interleave their read-modify-write cycles.
pub struct FileStorage {
    /// Path to the tasks file.
    tasks_file: PathBuf,
}

impl FileStorage {
    /// Create a file storage instance over the given tasks file.
    pub fn new(tasks_file: impl AsRef<Path>) -> Self {
        Self {
            tasks_file: tasks_file.as_ref().to_path_buf(),
        }
    }

    async fn ensure_parent_dir(&self) -> TrackerResult<()> {
        if let Some(parent) = self.tasks_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TrackerError::FileWrite {
                        path: parent.display().to_string(),
                        reason: e.to_string(),
                    })?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> TrackerResult<()> {
        self.ensure_parent_dir().await?;

        // Create an empty task list if the file doesn't exist yet
        if !self.tasks_file.exists() {
            self.save_tasks(&[]).await?;
        }

        Ok(())
    }

    fn storage_type(&self) -> &'static str {
        "file"
    }

    async fn load_tasks(&self) -> TrackerResult<Vec<Task>> {
        match fs::read_to_string(&self.tasks_file).await {
            Ok(content) => {
                let tasks: Vec<Task> = serde_json::from_str(&content)?;
                debug!(path = %self.tasks_file.display(), count = tasks.len(), "Loaded tasks file");
                Ok(tasks)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(TrackerError::FileRead {
                path: self.tasks_file.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn save_tasks(&self, tasks: &[Task]) -> TrackerResult<()> {
        self.ensure_parent_dir().await?;

        debug!(path = %self.tasks_file.display(), count = tasks.len(), "Writing tasks file");
        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_file, content)
            .await
            .map_err(|e| TrackerError::FileWrite {
                path: self.tasks_file.display().to_string(),
                reason: e.to_string(),
            })
    }
}
