//! Integration tests for the Tasks domain
//!
//! These tests use real PostgreSQL via testcontainers and need Docker:
//!
//! ```sh
//! cargo test -p domain_tasks --test integration_test -- --ignored
//! ```

use domain_tasks::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_find_task() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("save_and_find");

    let created = repo
        .save(Task::new(builder.title("laundry"), true))
        .await
        .unwrap();
    let id = assert_some(created.id, "storage should assign an id");

    let found = repo.find_by_id(id).await.unwrap();
    let found = assert_some(found, "task should exist");

    assert_eq!(found, created);
    assert!(repo.exists_by_id(id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_with_id_updates_row() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());

    let created = repo.save(Task::new("OneTask", false)).await.unwrap();
    let mut changed = created.clone();
    changed.title = "OneTask done".to_string();
    changed.completed = true;

    let updated = repo.save(changed.clone()).await.unwrap();

    assert_eq!(updated, changed);
    assert_eq!(repo.find_all().await.unwrap(), vec![changed]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_unknown_id_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());

    let result = repo.save(Task::with_id(4242, "ghost", false)).await;

    assert!(matches!(result, Err(TaskError::NotFound(4242))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_is_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all_order");

    for n in 0..5 {
        repo.save(Task::new(builder.title(&format!("task-{n}")), builder.completed(n)))
            .await
            .unwrap();
    }

    let ids: Vec<i64> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|task| task.id)
        .collect();

    assert_eq!(ids.len(), 5);
    assert_ascending(&ids, "find_all ids");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_parent_reference_is_persisted() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());

    let parent = repo.save(Task::new("cooking", false)).await.unwrap();
    let parent_id = assert_some(parent.id, "parent id");
    let child = repo
        .save(Task::new("dishes", false).with_parent(parent_id))
        .await
        .unwrap();

    let stored = repo.find_by_id(child.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(stored.parent_id, Some(parent_id));

    // Deleting the parent detaches the child
    repo.delete_by_id(parent_id).await.unwrap();
    let orphan = repo.find_by_id(child.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(orphan.parent_id, None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_removes_row_and_tolerates_missing_id() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());

    let created = repo.save(Task::new("hoovering", false)).await.unwrap();
    let id = created.id.unwrap();

    repo.delete_by_id(id).await.unwrap();
    assert!(!repo.exists_by_id(id).await.unwrap());

    repo.delete_by_id(id).await.unwrap();
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_crud_round() {
    let db = TestDatabase::new().await;
    let service = TaskService::with_field_mapper(PgTaskRepository::new(db.connection()));

    let created = service.create(Task::new("groceries", false)).await.unwrap();
    let id = created.id.unwrap();

    let read = service.read_by_id(id).await.unwrap();
    assert_eq!(read, created);

    let updated = service
        .update(id, Task::new("groceries", true))
        .await
        .unwrap();
    assert_eq!(updated, TaskDto::new(id, "groceries", true));

    assert_eq!(service.read_all().await.unwrap(), vec![updated]);

    assert!(service.delete(id).await.unwrap());
    assert!(matches!(
        service.read_by_id(id).await,
        Err(TaskError::NotFound(missing)) if missing == id
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_truncate_resets_table() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());

    repo.save(Task::new("cooking", false)).await.unwrap();
    db.truncate("tasks").await;

    assert!(repo.find_all().await.unwrap().is_empty());
}
