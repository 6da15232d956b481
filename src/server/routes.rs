use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::AppState;
use crate::chart::ChartRequest;
use crate::dashboard::StructureRequest;
use crate::error::DashboardError;
use crate::options::Options;

pub(super) async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(super) async fn controls(State(state): State<AppState>) -> Response {
    Json(state.dashboard.controls()).into_response()
}

pub(super) async fn options(State(state): State<AppState>) -> Response {
    Json(json!({
        "options": state.dashboard.options(),
        "schema": Options::json_schema(),
    }))
    .into_response()
}

pub(super) async fn figure(
    State(state): State<AppState>,
    Json(request): Json<ChartRequest>,
) -> Response {
    match state.dashboard.figure(&request) {
        Ok(figure) => Json(figure).into_response(),
        Err(e) => error_response(&e, state.debug),
    }
}

/// Takes raw bytes so an unreadable request still gets the default
/// structure instead of a rejection.
pub(super) async fn structures(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    let request = serde_json::from_slice::<StructureRequest>(&body)
        .unwrap_or_else(|e| {
            log::debug!("unreadable structure request ({e}); using defaults");
            StructureRequest::default()
        });
    Json(state.dashboard.structures_for(&request)).into_response()
}

fn error_response(error: &DashboardError, debug: bool) -> Response {
    let (status, message) = match error {
        DashboardError::UnknownColumn(_) => {
            (StatusCode::BAD_REQUEST, error.to_string())
        }
        _ if debug => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal error".to_owned(),
        ),
    };
    if status.is_server_error() {
        log::error!("request failed: {error}");
    }
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};

    use super::*;
    use crate::chart::tests::clustered_store;
    use crate::dashboard::Dashboard;
    use crate::molecule::MoleculeId;
    use crate::structures::MemoryStore;
    use crate::view_mode::ViewMode;

    fn sample_state() -> AppState {
        let store = clustered_store();
        let structures = MemoryStore::with_placeholders(
            store.rows().iter().map(|r| r.id).chain([MoleculeId(340)]),
        );
        AppState {
            dashboard: Arc::new(Dashboard::new(
                Options::default(),
                Arc::new(store),
                Arc::new(structures),
            )),
            debug: false,
        }
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok_json() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn figure_returns_traces() {
        let request = ChartRequest {
            mode: ViewMode::Validation,
            ..ChartRequest::default()
        };
        let response = figure(State(sample_state()), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn figure_unknown_column_is_bad_request() {
        let request = ChartRequest {
            mode: ViewMode::Explorer,
            color: Some("nope".to_owned()),
            ..ChartRequest::default()
        };
        let response = figure(State(sample_state()), Json(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "unknown column: nope");
    }

    #[tokio::test]
    async fn structures_resolves_selection() {
        let body = Bytes::from_static(
            br#"{"mode":"cluster","selected_data":{"points":[{"curveNumber":1,"pointIndex":3}]}}"#,
        );
        let response = structures(State(sample_state()), body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let fragments = body.as_array().unwrap();
        assert_eq!(fragments.len(), 1);
        // Group 2 holds 2, 7, 12, 17, ...
        assert_eq!(fragments[0]["structure_id"], 17);
        assert_eq!(fragments[0]["label"], "Structure ID: 1017");
        assert!(fragments[0]["payload"]["model"]["atoms"].is_array());
    }

    #[tokio::test]
    async fn unreadable_structure_request_shows_default() {
        let response =
            structures(State(sample_state()), Bytes::from_static(b"{oops")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body[0]["structure_id"], 340);
        assert_eq!(body[0]["label"], "Structure ID: default 153");
    }

    #[tokio::test]
    async fn controls_and_options_are_served() {
        let response = controls(State(sample_state())).await;
        let body = body_json(response).await;
        assert_eq!(body["modes"][1]["value"], "cluster");

        let response = options(State(sample_state())).await;
        let body = body_json(response).await;
        assert_eq!(body["options"]["validation"]["boundary"], 816);
        assert!(body["schema"]["properties"].is_object());
    }
}
