//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the analysis use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::application::ports::OptionChainPort;
use crate::application::use_cases::{AnalysisError, AnalyzeStrikesUseCase};

use super::request::AnalyzeRequest;
use super::response::{AnalyzeResponse, ErrorResponse, HealthResponse};

/// Application state shared across handlers.
pub struct AppState<C>
where
    C: OptionChainPort,
{
    /// Use case for analyzing strikes.
    pub analyze_strikes: Arc<AnalyzeStrikesUseCase<C>>,
    /// Application version.
    pub version: String,
}

impl<C> Clone for AppState<C>
where
    C: OptionChainPort,
{
    fn clone(&self) -> Self {
        Self {
            analyze_strikes: Arc::clone(&self.analyze_strikes),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: OptionChainPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/analyze", post(analyze))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<C>(State(state): State<AppState<C>>) -> impl IntoResponse
where
    C: OptionChainPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Analyze endpoint.
async fn analyze<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response
where
    C: OptionChainPort,
{
    match state.analyze_strikes.execute(request.into()).await {
        Ok(result) => (StatusCode::OK, Json(AnalyzeResponse::from(result))).into_response(),
        Err(e) => {
            let (status, code) = match &e {
                AnalysisError::InvalidRequest { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_REQUEST")
                }
                AnalysisError::UpstreamUnavailable { .. } => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE")
                }
            };
            (
                status,
                Json(ErrorResponse {
                    code: code.to_string(),
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ChainFetchError;
    use crate::config::EngineConfig;
    use crate::domain::analysis::RawChainRecord;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    struct MockChain {
        records: Result<Vec<RawChainRecord>, ChainFetchError>,
    }

    #[async_trait]
    impl OptionChainPort for MockChain {
        async fn fetch_chain(
            &self,
            _instrument_key: &str,
            _expiry_date: &str,
        ) -> Result<Vec<RawChainRecord>, ChainFetchError> {
            self.records.clone()
        }
    }

    fn state(records: Result<Vec<RawChainRecord>, ChainFetchError>) -> AppState<MockChain> {
        AppState {
            analyze_strikes: Arc::new(AnalyzeStrikesUseCase::new(
                Arc::new(MockChain { records }),
                EngineConfig::default(),
            )),
            version: "1.0.0-test".to_string(),
        }
    }

    fn analyze_body() -> serde_json::Value {
        serde_json::json!({
            "capital": 100000.0,
            "lot_size": 75.0,
            "option_type": "call",
            "expiry": "2024-06-27",
            "decision_time": "2024-06-03T09:30:00Z",
            "spot_target": 22600.0,
            "spot_sl": 22400.0,
            "instrument_key": "NSE_INDEX|Nifty 50"
        })
    }

    fn post_analyze(body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let app = create_router(state(Ok(vec![])));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn analyze_returns_ok_with_empty_chain() {
        let app = create_router(state(Ok(vec![])));
        let response = app.oneshot(post_analyze(&analyze_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: AnalyzeResponse = serde_json::from_slice(&body).unwrap();
        assert!(parsed.computed.is_empty());
        assert!(parsed.selected.is_empty());
    }

    #[tokio::test]
    async fn invalid_request_maps_to_bad_request() {
        let app = create_router(state(Ok(vec![])));
        let mut body = analyze_body();
        body["capital"] = serde_json::json!(-1.0);

        let response = app.oneshot(post_analyze(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_bad_gateway() {
        let app = create_router(state(Err(ChainFetchError::Network(
            "connection refused".to_string(),
        ))));

        let response = app.oneshot(post_analyze(&analyze_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "UPSTREAM_UNAVAILABLE");
    }
}
