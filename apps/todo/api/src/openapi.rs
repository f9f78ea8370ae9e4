use utoipa::OpenApi;

/// Root API documentation, with every domain nested under its mount path
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "CRUD service for to-do tasks"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = crate::api::tasks::PATH, api = domain_tasks::ApiDoc)
    )
)]
pub struct ApiDoc;
