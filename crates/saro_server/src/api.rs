//! Router, handlers, and server loop.

use crate::error::{error_response, missing_narrative};
use crate::request::ClassifyRequest;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use saro_error::{SaroResult, ServerError, ServerErrorKind};
use saro_oracle::Oracle;
use saro_pipeline::SaroClassifier;
use serde_json::json;
use std::net::SocketAddr;
use tracing::{info, instrument};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState<O: Oracle + Clone> {
    classifier: SaroClassifier<O>,
}

impl<O: Oracle + Clone> AppState<O> {
    /// Creates new application state around a classifier.
    pub fn new(classifier: SaroClassifier<O>) -> Self {
        Self { classifier }
    }
}

/// Creates the classification API router.
pub fn create_router<O>(state: AppState<O>) -> Router
where
    O: Oracle + Clone + 'static,
{
    Router::new()
        .route("/classify", post(classify::<O>))
        .route("/health", get(health))
        .with_state(state)
        // The Lambda-era API allowed any origin; browser callers depend on it.
        .layer(tower_http::cors::CorsLayer::permissive())
}

/// Bind and serve the classification API.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server loop fails.
pub async fn run<O>(state: AppState<O>, port: u16) -> SaroResult<()>
where
    O: Oracle + Clone + 'static,
{
    let app = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting classification API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind(format!("Failed to bind to {}: {}", addr, e)))
    })?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    Ok(())
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Classify one SARO event narrative.
#[instrument(skip_all)]
async fn classify<O>(
    State(state): State<AppState<O>>,
    Json(request): Json<ClassifyRequest>,
) -> Response
where
    O: Oracle + Clone + 'static,
{
    let Some(narrative) = request.narrative() else {
        return missing_narrative().into_response();
    };
    if narrative.trim().is_empty() {
        return missing_narrative().into_response();
    }

    let result = match request.model.as_deref() {
        Some(model) => state.classifier.classify_with_model(narrative, model).await,
        None => state.classifier.classify(narrative).await,
    };

    match result {
        Ok(classification) => (StatusCode::OK, Json(classification)).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}
