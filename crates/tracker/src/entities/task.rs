//! Task entity and request payloads.

use serde::{Deserialize, Serialize};

/// A tracked task.
///
/// This is also the persisted shape: every storage backend holds a plain
/// JSON array of these objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Numeric id, unique within one store.
    pub id: u64,

    /// Short human-readable title.
    pub title: String,

    /// Current status.
    pub status: TaskStatus,
}

impl Task {
    /// Create a new task.
    pub fn new(id: u64, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            title: title.into(),
            status,
        }
    }
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet.
    #[default]
    Pending,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Payload for creating a task. The id is allocated by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title of the new task.
    pub title: String,
    /// Initial status.
    pub status: TaskStatus,
}

/// Payload for updating a task. Both fields are replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title.
    pub title: String,
    /// New status.
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serializes_to_flat_object() {
        let task = Task::new(1, "Write report", TaskStatus::InProgress);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "Write report", "status": "in-progress"})
        );
    }

    #[test]
    fn test_task_roundtrip() {
        let task = Task::new(42, "Ship it", TaskStatus::Done);
        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_status_kebab_case_wire_format() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Done).unwrap(),
            "\"done\""
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result: Result<TaskStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_status_display_matches_wire_format() {
        for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_create_task_requires_both_fields() {
        let result: Result<CreateTask, _> = serde_json::from_str(r#"{"title": "no status"}"#);
        assert!(result.is_err());

        let ok: CreateTask =
            serde_json::from_str(r#"{"title": "both", "status": "pending"}"#).unwrap();
        assert_eq!(ok.title, "both");
        assert_eq!(ok.status, TaskStatus::Pending);
    }
}
