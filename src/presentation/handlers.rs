// HTTP request handlers
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Re-encode a single panel; 204 when its type is not recognised
pub async fn normalize_panel(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match state.dashboard_service.normalize_panel(&body) {
        Ok(Some(panel)) => Json(panel).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => unprocessable(e),
    }
}

/// Re-encode every recognised panel of a dashboard document
pub async fn normalize_dashboard(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match state.dashboard_service.normalize_dashboard(&body) {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => unprocessable(e),
    }
}

fn unprocessable(err: anyhow::Error) -> Response {
    let message = format!("{:#}", err);
    tracing::warn!("Rejecting document: {}", message);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": message })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn state() -> State<Arc<AppState>> {
        State(Arc::new(AppState::default()))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_normalize_panel_ok() {
        let body = Bytes::from_static(br#"{"type": "text", "content": "hi"}"#);
        let response = normalize_panel(state(), body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "hi");
    }

    #[tokio::test]
    async fn test_normalize_panel_unknown_type() {
        let body = Bytes::from_static(br#"{"type": "unknown-xyz"}"#);
        let response = normalize_panel(state(), body).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_normalize_panel_malformed() {
        let body = Bytes::from_static(br#"{"type": "graph", "yaxes": [{}]}"#);
        let response = normalize_panel(state(), body).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("exactly 2"));
    }

    #[tokio::test]
    async fn test_normalize_dashboard_ok() {
        let body = Bytes::from_static(
            br#"{"title": "D", "rows": [{"panels": [{"type": "graph", "targets": [{"target": "a.b"}]}]}]}"#,
        );
        let response = normalize_dashboard(state(), body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["title"], "D");
        assert_eq!(json["rows"][0]["panels"][0]["targets"][0]["refid"], "A");
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }
}
