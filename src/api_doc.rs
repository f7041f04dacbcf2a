use utoipa::OpenApi;

use crate::handlers;
use crate::models::{Item, NewItem};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pg-items-service API",
        version = "1.0.0",
        description = "CRUD-style access to a single PostgreSQL table"
    ),
    paths(
        handlers::health::self_check_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::list::list_handler
    ),
    components(schemas(Item, NewItem)),
    tags(
        (name = "health", description = "Database liveness probe"),
        (name = "items", description = "Item operations")
    )
)]
pub struct ApiDoc;
