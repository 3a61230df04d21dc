#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! HTTP API for classifying SARO event narratives.
//!
//! Exposes the pipeline behind two routes: `POST /classify` takes a JSON
//! body carrying the narrative (under `descripcion`, or the legacy keys
//! `descripcion_saro` / `texto`) and replies with the structured
//! classification, and `GET /health` answers liveness probes. Error
//! replies keep the Spanish `{error, mensaje}` body shape existing
//! consumers already parse.
//!
//! # Examples
//!
//! ```no_run
//! use saro_oracle::OpenAiClient;
//! use saro_pipeline::SaroClassifier;
//! use saro_server::AppState;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = SaroClassifier::new(OpenAiClient::from_env()?);
//! saro_server::run(AppState::new(classifier), 8080).await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod request;

pub use api::{AppState, create_router, run};
pub use error::ErrorBody;
pub use request::ClassifyRequest;
