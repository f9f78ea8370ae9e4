use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const TITLE_MAX_LEN: u64 = 255;

/// Persisted to-do item.
///
/// `id` is `None` until storage assigns one and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Task {
    pub id: Option<i64>,
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    pub completed: bool,
    /// Optional parent task
    pub parent_id: Option<i64>,
}

impl Task {
    /// Transient task without a parent
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: None,
            title: title.into(),
            completed,
            parent_id: None,
        }
    }

    /// Task as returned by storage
    pub fn with_id(id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: Some(id),
            ..Self::new(title, completed)
        }
    }

    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Copy the client-editable fields of `changes`, keeping this task's id
    pub fn apply_update(&mut self, changes: Task) {
        self.title = changes.title;
        self.completed = changes.completed;
        self.parent_id = changes.parent_id;
    }
}

/// External view of a task. The parent reference stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    /// Storage-assigned id
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Laundry")]
    pub title: String,
    pub completed: bool,
}

impl TaskDto {
    pub fn new(id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            completed,
        }
    }
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
        }
    }
}

/// Request body for creating or replacing a task
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct TaskPayload {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    #[schema(example = "Laundry", min_length = 1, max_length = 255)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        Self {
            id: None,
            title: payload.title,
            completed: payload.completed,
            parent_id: payload.parent_id,
        }
    }
}
