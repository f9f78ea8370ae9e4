use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::Task,
    repository::TaskRepository,
};

#[derive(Clone)]
pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn save(&self, task: Task) -> TaskResult<Task> {
        let parent_id = task.parent_id;
        match task.id {
            None => {
                let model = self
                    .base
                    .insert(task.into())
                    .await
                    .map_err(|e| save_error(e, None, parent_id))?;
                tracing::info!(task_id = model.id, "Created task");
                Ok(model.into())
            }
            Some(id) => {
                let model = self
                    .base
                    .update(task.into())
                    .await
                    .map_err(|e| save_error(e, Some(id), parent_id))?;
                tracing::info!(task_id = id, "Updated task");
                Ok(model.into())
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: i64) -> TaskResult<bool> {
        Ok(self.base.exists_by_id(id).await?)
    }

    async fn delete_by_id(&self, id: i64) -> TaskResult<()> {
        let rows = self.base.delete_by_id(id).await?;
        if rows > 0 {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(())
    }
}

/// Unknown ids and dangling parent references become domain errors
fn save_error(err: DbErr, task_id: Option<i64>, parent_id: Option<i64>) -> TaskError {
    if let (DbErr::RecordNotUpdated, Some(id)) = (&err, task_id) {
        return TaskError::NotFound(id);
    }

    match (err.sql_err(), parent_id) {
        (Some(SqlErr::ForeignKeyConstraintViolation(_)), Some(parent_id)) => {
            TaskError::unknown_parent(parent_id)
        }
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn model(id: i64, title: &str, completed: bool) -> entity::Model {
        entity::Model {
            id,
            title: title.to_string(),
            completed,
            parent_id: None,
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn test_save_transient_task_inserts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Laundry", true)]])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let saved = repo.save(Task::new("Laundry", true)).await.unwrap();

        assert_eq!(saved, Task::with_id(1, "Laundry", true));
    }

    #[tokio::test]
    async fn test_save_stored_task_updates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "OneTask", true)]])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let saved = repo.save(Task::with_id(1, "OneTask", true)).await.unwrap();

        assert_eq!(saved.id, Some(1));
        assert!(saved.completed);
    }

    #[tokio::test]
    async fn test_save_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let result = repo.save(Task::with_id(42, "ghost", false)).await;

        assert!(matches!(result, Err(TaskError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "groceries", false)], vec![]])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        assert_eq!(
            repo.find_by_id(1).await.unwrap(),
            Some(Task::with_id(1, "groceries", false))
        );
        assert_eq!(repo.find_by_id(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_orders_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "cooking", false), model(2, "dishes", true)]])
            .into_connection();
        let repo = PgTaskRepository::new(db.clone());

        let tasks = repo.find_all().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1], Task::with_id(2, "dishes", true));

        let log = db.into_transaction_log();
        assert!(log[0].statements()[0].sql.contains("ORDER BY"));
    }

    #[tokio::test]
    async fn test_exists_by_id_counts_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(1)], vec![count_row(0)]])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        assert!(repo.exists_by_id(1).await.unwrap());
        assert!(!repo.exists_by_id(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_by_id_missing_row_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        assert!(repo.delete_by_id(7).await.is_ok());
    }

    #[tokio::test]
    async fn test_database_failure_maps_to_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let result = repo.find_all().await;
        assert!(matches!(result, Err(TaskError::Database(_))));
    }

    #[tokio::test]
    async fn test_pool_timeout_answers_service_unavailable() {
        use axum::{http::StatusCode, response::IntoResponse};
        use sea_orm::ConnAcquireErr;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::ConnectionAcquire(ConnAcquireErr::Timeout)])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let err = repo.find_all().await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_save_error_keeps_other_failures() {
        assert!(matches!(
            save_error(DbErr::RecordNotUpdated, Some(3), None),
            TaskError::NotFound(3)
        ));
        assert!(matches!(
            save_error(DbErr::Custom("boom".into()), None, Some(1)),
            TaskError::Database(_)
        ));
    }
}
