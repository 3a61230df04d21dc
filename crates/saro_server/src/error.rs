//! Error reply bodies and status mapping.

use axum::Json;
use axum::http::StatusCode;
use saro_error::{ClassificationErrorKind, SaroError, SaroErrorKind};
use serde::{Deserialize, Serialize};

/// Spanish-language error body, the shape existing consumers parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short error description
    pub error: String,
    /// Human-readable detail
    pub mensaje: String,
}

impl ErrorBody {
    pub(crate) fn new(error: impl Into<String>, mensaje: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            mensaje: mensaje.into(),
        }
    }
}

/// Reply for a request that carried no usable narrative.
pub(crate) fn missing_narrative() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::new(
            "No se proporcionó la descripción del evento SARO",
            "El campo \"descripcion\" es requerido en el body de la petición",
        )),
    )
}

/// Map a pipeline error onto a status code and Spanish body.
///
/// Blank input is the caller's fault (400). An unusable stage-one reply
/// means the classification could not be computed (500). Oracle transport
/// problems surface as a bad gateway (502), since the failure lives in
/// the upstream completion service.
pub(crate) fn error_response(err: &SaroError) -> (StatusCode, Json<ErrorBody>) {
    match err.kind() {
        SaroErrorKind::Classification(e) if e.kind == ClassificationErrorKind::EmptyInput => {
            missing_narrative()
        }
        SaroErrorKind::Classification(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Error interno del servidor", e.to_string())),
        ),
        SaroErrorKind::Oracle(e) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody::new(
                "Error de comunicación con el servicio de clasificación",
                e.to_string(),
            )),
        ),
        SaroErrorKind::Config(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Error interno del servidor", e.to_string())),
        ),
        SaroErrorKind::Server(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Error interno del servidor", e.to_string())),
        ),
    }
}
