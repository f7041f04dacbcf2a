use crate::error::ApiError;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /items handler - List every item
///
/// Rows are collected in full before the response is built, so a failure
/// part-way through yields a clean 500 rather than truncated JSON.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items, ordered by pk", body = Vec<Item>),
        (status = 500, description = "Database error", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let items = state.store.list_all().await?;

    tracing::info!("Listed {} items", items.len());
    Ok((StatusCode::OK, Json(items)))
}
