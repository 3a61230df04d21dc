//! Route-level tests driving the router directly, without a listener.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use saro_core::CompletionRequest;
use saro_error::{OracleError, OracleErrorKind};
use saro_oracle::Oracle;
use saro_pipeline::SaroClassifier;
use saro_server::{AppState, create_router};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

/// Oracle stub that serves scripted replies in order.
#[derive(Debug, Clone)]
struct StubOracle {
    replies: Arc<Mutex<VecDeque<Result<String, OracleErrorKind>>>>,
}

impl StubOracle {
    fn new(replies: Vec<Result<&str, OracleErrorKind>>) -> Self {
        let replies = replies
            .into_iter()
            .map(|reply| reply.map(str::to_string))
            .collect();
        Self {
            replies: Arc::new(Mutex::new(replies)),
        }
    }
}

#[async_trait]
impl Oracle for StubOracle {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, OracleError> {
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(kind)) => Err(OracleError::new(kind)),
            None => Err(OracleError::new(OracleErrorKind::Transport(
                "stub exhausted".to_string(),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

fn app(replies: Vec<Result<&str, OracleErrorKind>>) -> Router {
    create_router(AppState::new(SaroClassifier::new(StubOracle::new(replies))))
}

async fn post_classify(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/classify")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn classifies_a_narrative_end_to_end() {
    let app = app(vec![Ok(r#"["Tecnología"]"#), Ok(r#"["Fallo de red"]"#)]);

    let (status, body) = post_classify(
        app,
        serde_json::json!({
            "descripcion": "La tesorería no pudo operar durante 3 horas por una falla de red"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "eventos_n1": ["Tecnología"],
            "riesgos": [{"Riesgo_nivel_1": "Tecnología", "Riesgo_nivel_2": ["Fallo de red"]}]
        })
    );
}

#[tokio::test]
async fn legacy_texto_key_is_accepted() {
    let app = app(vec![Ok(r#"["Tecnología"]"#), Ok(r#"["Fallo de red"]"#)]);

    let (status, body) =
        post_classify(app, serde_json::json!({"texto": "Falla de red en tesorería"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eventos_n1"][0], "Tecnología");
}

#[tokio::test]
async fn empty_descripcion_falls_through_to_texto() {
    let app = app(vec![Ok(r#"["Tecnología"]"#), Ok(r#"["Fallo de red"]"#)]);

    let (status, _) = post_classify(
        app,
        serde_json::json!({"descripcion": "", "texto": "Falla de red en tesorería"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_narrative_is_a_bad_request() {
    let app = app(vec![]);

    let (status, body) = post_classify(app, serde_json::json!({"model": "gpt-4o-mini"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No se proporcionó la descripción del evento SARO");
    assert_eq!(
        body["mensaje"],
        "El campo \"descripcion\" es requerido en el body de la petición"
    );
}

#[tokio::test]
async fn blank_narrative_is_a_bad_request() {
    let app = app(vec![]);

    let (status, body) = post_classify(app, serde_json::json!({"descripcion": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No se proporcionó la descripción del evento SARO");
}

#[tokio::test]
async fn unusable_selection_reply_is_an_internal_error() {
    let app = app(vec![Ok("No fue posible clasificar el evento.")]);

    let (status, body) =
        post_classify(app, serde_json::json!({"descripcion": "Falla de red"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error interno del servidor");
}

#[tokio::test]
async fn oracle_outage_is_a_bad_gateway() {
    let app = app(vec![Err(OracleErrorKind::Transport("refused".to_string()))]);

    let (status, body) =
        post_classify(app, serde_json::json!({"descripcion": "Falla de red"})).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Error de comunicación con el servicio de clasificación");
}

#[tokio::test]
async fn model_override_is_accepted() {
    let app = app(vec![Ok(r#"["Tecnología"]"#), Ok(r#"["Fallo de red"]"#)]);

    let (status, _) = post_classify(
        app,
        serde_json::json!({"descripcion": "Falla de red", "model": "gpt-4.1"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_answers_ok() {
    let app = app(vec![]);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({"status": "ok"}));
}
