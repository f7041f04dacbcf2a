use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body returned when a point lookup matches no row
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Custom error type for API endpoints
///
/// Every variant maps to one HTTP status code. Bodies are plain text, and
/// backend failures carry the underlying error chain.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter is not a valid item id
    InvalidId(String),
    /// No row with the requested pk
    ItemNotFound(i32),
    /// Database operation error
    DatabaseError(anyhow::Error),
    /// Request body is not a valid item payload
    JsonError(serde_json::Error),
    /// Request headers exceed the configured limit
    HeadersTooLarge(usize),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid item id: expected an integer, got '{}'", id),
            ),
            ApiError::ItemNotFound(pk) => {
                tracing::debug!("Item not found with pk: {}", pk);
                (StatusCode::NOT_FOUND, ITEM_NOT_FOUND.to_string())
            }
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
            }
            ApiError::JsonError(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::HeadersTooLarge(size) => (
                StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
                format!("Request headers too large: {} bytes", size),
            ),
        };

        (status, message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
