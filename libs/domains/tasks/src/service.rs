use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::mapper::{FieldMapper, Mapper};
use crate::models::{Task, TaskDto};
use crate::repository::TaskRepository;

/// CRUD over tasks: persistence through `R`, projection through `M`.
pub struct TaskService<R, M = FieldMapper<Task, TaskDto>>
where
    R: TaskRepository,
    M: Mapper<Task, TaskDto>,
{
    repository: Arc<R>,
    mapper: Arc<M>,
}

impl<R, M> Clone for TaskService<R, M>
where
    R: TaskRepository,
    M: Mapper<Task, TaskDto>,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            mapper: Arc::clone(&self.mapper),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    /// Service using the `From<&Task>` projection
    pub fn with_field_mapper(repository: R) -> Self {
        Self::new(repository, FieldMapper::new())
    }
}

impl<R, M> TaskService<R, M>
where
    R: TaskRepository,
    M: Mapper<Task, TaskDto>,
{
    pub fn new(repository: R, mapper: M) -> Self {
        Self {
            repository: Arc::new(repository),
            mapper: Arc::new(mapper),
        }
    }

    /// Persist a new task. Any id on the input is discarded.
    #[instrument(skip(self, task), fields(title = %task.title))]
    pub async fn create(&self, mut task: Task) -> TaskResult<TaskDto> {
        task.validate()?;
        task.id = None;
        self.ensure_parent_exists(task.parent_id).await?;

        let saved = self.repository.save(task).await?;
        Ok(self.mapper.map(&saved))
    }

    #[instrument(skip(self), fields(task_id = id))]
    pub async fn read_by_id(&self, id: i64) -> TaskResult<TaskDto> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        Ok(self.mapper.map(&task))
    }

    /// Overwrite title, completion and parent of an existing task
    #[instrument(skip(self, task), fields(task_id = id))]
    pub async fn update(&self, id: i64, task: Task) -> TaskResult<TaskDto> {
        task.validate()?;

        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        self.ensure_parent_exists(task.parent_id).await?;
        existing.apply_update(task);

        let saved = self.repository.save(existing).await?;
        Ok(self.mapper.map(&saved))
    }

    /// Every task, mapped one by one in repository order
    #[instrument(skip(self))]
    pub async fn read_all(&self) -> TaskResult<Vec<TaskDto>> {
        let tasks = self.repository.find_all().await?;
        Ok(tasks.iter().map(|task| self.mapper.map(task)).collect())
    }

    /// Delete and report whether the task is gone afterwards.
    ///
    /// Deleting an id that was never stored returns `true`.
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn delete(&self, id: i64) -> TaskResult<bool> {
        self.repository.delete_by_id(id).await?;
        let still_exists = self.repository.exists_by_id(id).await?;

        if still_exists {
            tracing::warn!(task_id = id, "Task still present after delete");
        }
        Ok(!still_exists)
    }

    async fn ensure_parent_exists(&self, parent_id: Option<i64>) -> TaskResult<()> {
        if let Some(parent_id) = parent_id {
            if !self.repository.exists_by_id(parent_id).await? {
                return Err(TaskError::unknown_parent(parent_id));
            }
        }
        Ok(())
    }
}
