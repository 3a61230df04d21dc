//! Oracle transport error types.

/// Specific error conditions for completion calls against the oracle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum OracleErrorKind {
    /// Request never reached the completion service
    #[display("Transport failure: {}", _0)]
    Transport(String),

    /// Completion service replied with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// Response body could not be decoded into the completion schema
    #[display("Failed to deserialize completion response: {}", _0)]
    Deserialization(String),

    /// Response decoded but carried no completion choices
    #[display("Completion response contained no choices")]
    EmptyCompletion,
}

/// Error type for oracle operations.
///
/// Fatal when raised during Stage-1 category selection; Stage-2 refinement
/// treats it as an empty refinement instead.
///
/// # Examples
///
/// ```
/// use saro_error::{OracleError, OracleErrorKind};
///
/// let err = OracleError::new(OracleErrorKind::EmptyCompletion);
/// assert!(format!("{}", err).contains("no choices"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Oracle Error: {} at line {} in {}", kind, line, file)]
pub struct OracleError {
    /// The specific error condition
    pub kind: OracleErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl OracleError {
    /// Create a new OracleError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OracleErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
