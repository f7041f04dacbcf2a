// Router assembly and the HTTP server loop

use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::error::ApiError;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use crate::store::ItemStore;

/// Deadline for every item request, database work included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Combined size of all request header names and values
pub const MAX_HEADER_BYTES: usize = 1024;

/// Build the application router
///
/// Item routes run under [`REQUEST_TIMEOUT`]; when it expires the handler
/// and its query are dropped and the client gets 408. The self-check keeps
/// its own one-second bound on the probe. Item bodies have no size cap since
/// `data` is unbounded.
pub fn build_router(state: AppState) -> Router {
    let items = Router::new()
        .route(
            routes::ITEMS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(routes::ITEM, get(handlers::get_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT));

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(limit_header_size));

    Router::new()
        .route(routes::SELF_CHECK, get(handlers::self_check_handler))
        .merge(items)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(layers)
        .with_state(state)
}

async fn limit_header_size(request: Request, next: Next) -> Result<Response, ApiError> {
    let size: usize = request
        .headers()
        .iter()
        .map(|(name, value)| name.as_str().len() + value.len())
        .sum();

    if size > MAX_HEADER_BYTES {
        tracing::warn!("Rejecting request with {} bytes of headers", size);
        return Err(ApiError::HeadersTooLarge(size));
    }

    Ok(next.run(request).await)
}

/// Connect to the database and serve until Ctrl+C or SIGTERM
pub async fn run(config: Config) -> Result<()> {
    let store = ItemStore::connect(&config).await?;
    let app = build_router(AppState {
        store: store.clone(),
    });

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    store.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
