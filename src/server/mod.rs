//! HTTP surface: the page bundle plus a small JSON API.
//!
//! | Route                  | Purpose                                   |
//! |------------------------|-------------------------------------------|
//! | `GET /`                | page                                      |
//! | `GET /assets/*path`    | page scripts and styles                   |
//! | `GET /health`          | liveness                                  |
//! | `GET /api/controls`    | control-surface description               |
//! | `GET /api/options`     | options in effect and their JSON Schema   |
//! | `POST /api/figure`     | [`ChartRequest`](crate::chart::ChartRequest) → figure |
//! | `POST /api/structures` | [`StructureRequest`](crate::dashboard::StructureRequest) → fragments |

mod assets;
mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::dashboard::Dashboard;
use crate::error::DashboardError;

/// Shared handler state.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dashboard: Arc<Dashboard>,
    /// Include internal error details in responses.
    pub(crate) debug: bool,
}

/// Build the router over a dashboard.
#[must_use]
pub fn router(dashboard: Arc<Dashboard>, debug: bool) -> Router {
    let state = AppState { dashboard, debug };
    Router::new()
        .route("/", get(assets::index))
        .route("/assets/*path", get(assets::asset))
        .route("/health", get(routes::health))
        .route("/api/controls", get(routes::controls))
        .route("/api/options", get(routes::options))
        .route("/api/figure", post(routes::figure))
        .route("/api/structures", post(routes::structures))
        .with_state(state)
}

/// Serve the dashboard until the process is stopped.
pub fn serve(dashboard: Arc<Dashboard>) -> Result<(), DashboardError> {
    let server = dashboard.options().server.clone();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(server.worker_threads.max(1))
        .enable_all()
        .build()
        .map_err(|e| {
            DashboardError::Server(format!("failed to build tokio runtime: {e}"))
        })?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&server.bind)
            .await
            .map_err(|e| {
                DashboardError::Server(format!(
                    "failed to bind {}: {e}",
                    server.bind
                ))
            })?;
        log::info!("Dashboard listening on http://{}", server.bind);

        axum::serve(listener, router(dashboard, server.debug))
            .await
            .map_err(|e| DashboardError::Server(format!("axum server failed: {e}")))
    })
}
