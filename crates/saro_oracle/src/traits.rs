//! Trait definition for the classification oracle boundary.

use async_trait::async_trait;
use saro_core::CompletionRequest;
use saro_error::OracleError;

/// A completion service consulted as a classification oracle.
///
/// Implementations are substitutable by construction: production code
/// injects an HTTP client, tests inject a deterministic stub. The oracle
/// is non-deterministic and fallible from the pipeline's point of view,
/// and its replies are advisory only; all validation happens downstream.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Request a completion and return the oracle's raw text reply,
    /// trimmed of surrounding whitespace.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, OracleError>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}
