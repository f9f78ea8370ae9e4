use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::{TaskError, TaskResult};
use crate::mapper::Mapper;
use crate::models::{Task, TaskDto, TaskPayload};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(
        schemas(TaskDto, TaskPayload),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "To-do task endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R, M> = State<Arc<TaskService<R, M>>>;

/// Create the task router with all HTTP endpoints
pub fn router<R, M>(service: TaskService<R, M>) -> Router
where
    R: TaskRepository + 'static,
    M: Mapper<Task, TaskDto> + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks::<R, M>).post(create_task::<R, M>))
        .route(
            "/{id}",
            get(get_task::<R, M>)
                .put(update_task::<R, M>)
                .delete(delete_task::<R, M>),
        )
        .with_state(shared_service)
}

/// List all tasks
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All tasks in id order", body = Vec<TaskDto>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_tasks<R, M>(State(service): SharedService<R, M>) -> TaskResult<Json<Vec<TaskDto>>>
where
    R: TaskRepository,
    M: Mapper<Task, TaskDto>,
{
    let tasks = service.read_all().await?;
    Ok(Json(tasks))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_task<R, M>(
    State(service): SharedService<R, M>,
    ValidatedJson(input): ValidatedJson<TaskPayload>,
) -> TaskResult<impl IntoResponse>
where
    R: TaskRepository,
    M: Mapper<Task, TaskDto>,
{
    let task = service.create(input.into()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = TaskDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_task<R, M>(
    State(service): SharedService<R, M>,
    IdPath(id): IdPath,
) -> TaskResult<Json<TaskDto>>
where
    R: TaskRepository,
    M: Mapper<Task, TaskDto>,
{
    let task = service.read_by_id(id).await?;
    Ok(Json(task))
}

/// Replace the fields of an existing task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_task<R, M>(
    State(service): SharedService<R, M>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<TaskPayload>,
) -> TaskResult<Json<TaskDto>>
where
    R: TaskRepository,
    M: Mapper<Task, TaskDto>,
{
    let task = service.update(id, input.into()).await?;
    Ok(Json(task))
}

/// Delete a task
///
/// Deleting an unknown id also succeeds.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_task<R, M>(
    State(service): SharedService<R, M>,
    IdPath(id): IdPath,
) -> TaskResult<StatusCode>
where
    R: TaskRepository,
    M: Mapper<Task, TaskDto>,
{
    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(TaskError::Internal(format!("Task {id} still present after delete")))
    }
}
