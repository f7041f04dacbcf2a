use crate::error::ApiError;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /items/{id} handler - Retrieve a single item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i32, Path, description = "Primary key of the item")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Id is not an integer", body = String, content_type = "text/plain"),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Database error", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let pk = id.parse::<i32>().map_err(|_| ApiError::InvalidId(id))?;

    match state.store.get(pk).await? {
        Some(item) => {
            tracing::info!("Retrieved item with pk: {}", pk);
            Ok((StatusCode::OK, Json(item)))
        }
        None => Err(ApiError::ItemNotFound(pk)),
    }
}
