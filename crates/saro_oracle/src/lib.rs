#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! Oracle adapter for the SARO classification pipeline.
//!
//! The pipeline treats a chat completion service as a classification
//! oracle: structured prompt in, raw text out. This crate defines that
//! boundary as the [`Oracle`] trait and ships one production
//! implementation, [`OpenAiClient`], speaking the OpenAI-compatible
//! `/chat/completions` protocol over HTTPS.
//!
//! Everything above this crate validates oracle output before trusting
//! it, so implementations only deliver text; they never interpret it.
//!
//! # Examples
//!
//! ```no_run
//! use saro_core::CompletionRequest;
//! use saro_oracle::{OpenAiClient, Oracle, OracleConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new(OracleConfig::from_env()?);
//! let request = CompletionRequest::new("gpt-4o-mini", "system", "user", 0.0);
//! let reply = client.complete(&request).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod response;
mod traits;

pub use client::OpenAiClient;
pub use config::OracleConfig;
pub use response::{ChatCompletion, Choice, ChoiceMessage, Usage};
pub use traits::Oracle;
