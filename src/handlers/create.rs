use crate::error::ApiError;
use crate::models::{Item, NewItem};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /items handler - Insert a new item
///
/// The body is decoded regardless of its `Content-Type`. Any decode failure
/// is a 400 carrying the decoder's message.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = NewItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 500, description = "Database error", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let new_item: NewItem = serde_json::from_slice(&body)?;

    let item = state.store.create(&new_item.data).await?;

    tracing::info!("Created item with pk: {}", item.pk);
    Ok((StatusCode::CREATED, Json(item)))
}
