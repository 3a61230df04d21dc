//! Saro - SARO operational-risk classification
//!
//! Saro classifies free-text SARO event narratives (operational-risk
//! incident reports, in Spanish) against the fixed ORX reference taxonomy.
//! A chat-completion oracle proposes level-1 risk categories and refines
//! each one against its published level-2 candidates; only names that
//! survive exact matching against the taxonomy reach the final result.
//!
//! # Features
//!
//! - **Two-stage pipeline**: Category selection, then per-category refinement
//! - **Fixed taxonomy**: The 46 published ORX (N1, N2) pairings, compiled in
//! - **Oracle abstraction**: Single `Oracle` trait, with an OpenAI-compatible client
//! - **HTTP API**: `POST /classify` with the Spanish `{error, mensaje}` error shape
//! - **CLI**: Classify from the shell, serve the API, inspect the taxonomy
//!
//! # Quick Start
//!
//! ```no_run
//! use saro::{OpenAiClient, SaroClassifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = SaroClassifier::new(OpenAiClient::from_env()?);
//!
//!     let result = classifier
//!         .classify("La tesorería no pudo operar durante 3 horas por una falla de red")
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Saro is organized as a workspace with focused crates:
//!
//! - `saro_core` - Core data types (Message, CompletionRequest, Classification)
//! - `saro_error` - Error types
//! - `saro_taxonomy` - The ORX reference taxonomy and lookups over it
//! - `saro_oracle` - Oracle trait and the OpenAI-compatible client
//! - `saro_pipeline` - The two-stage classification pipeline
//! - `saro_server` - Axum HTTP API
//!
//! This crate (`saro`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use saro_core::*;
pub use saro_error::*;
pub use saro_oracle::*;
pub use saro_pipeline::*;
pub use saro_server::*;
pub use saro_taxonomy::*;
