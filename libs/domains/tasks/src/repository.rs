use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::Task;

/// Persistence boundary for tasks
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert when `task.id` is `None`, otherwise update. Returns the stored task.
    async fn save(&self, task: Task) -> TaskResult<Task>;

    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// All tasks in ascending id order
    async fn find_all(&self) -> TaskResult<Vec<Task>>;

    async fn exists_by_id(&self, id: i64) -> TaskResult<bool>;

    /// Remove a task. Missing ids are not an error.
    async fn delete_by_id(&self, id: i64) -> TaskResult<()>;
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Store>>,
}

#[derive(Debug)]
struct Store {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(Store {
                tasks: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, mut task: Task) -> TaskResult<Task> {
        let mut store = self.state.write().await;

        if let Some(parent_id) = task.parent_id {
            if !store.tasks.contains_key(&parent_id) {
                return Err(TaskError::unknown_parent(parent_id));
            }
        }

        let id = match task.id {
            Some(id) => id,
            None => store.next_id,
        };
        // Explicit ids must not be handed out again by the sequence
        store.next_id = store.next_id.max(id.saturating_add(1));

        task.id = Some(id);
        let created = store.tasks.insert(id, task.clone()).is_none();

        if created {
            tracing::info!(task_id = id, "Created task");
        } else {
            tracing::info!(task_id = id, "Updated task");
        }
        Ok(task)
    }

    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let store = self.state.read().await;
        Ok(store.tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let store = self.state.read().await;
        Ok(store.tasks.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i64) -> TaskResult<bool> {
        let store = self.state.read().await;
        Ok(store.tasks.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> TaskResult<()> {
        let mut store = self.state.write().await;
        if store.tasks.remove(&id).is_none() {
            return Ok(());
        }

        // Children outlive their parent, detached
        for child in store.tasks.values_mut() {
            if child.parent_id == Some(id) {
                child.parent_id = None;
            }
        }
        tracing::info!(task_id = id, "Deleted task");
        Ok(())
    }
}
