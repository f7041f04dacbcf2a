use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};
use std::time::Duration;

/// Upper bound on the database probe
pub const SELF_CHECK_TIMEOUT: Duration = Duration::from_secs(1);

/// GET /self-check handler - Database liveness probe
///
/// Pings PostgreSQL through a pooled connection. Returns 200 with an empty
/// body if the ping succeeds within one second, 500 with the error text
/// otherwise.
#[utoipa::path(
    get,
    path = routes::SELF_CHECK,
    responses(
        (status = 200, description = "Database is reachable"),
        (status = 500, description = "Database is unreachable", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn self_check_handler(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.health_check(SELF_CHECK_TIMEOUT).await?;

    tracing::debug!("Self-check passed");
    Ok(StatusCode::OK)
}
