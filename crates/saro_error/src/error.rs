//! Top-level error wrapper types.

use crate::{ClassificationError, ConfigError, OracleError, ServerError};

/// The foundation error enum for the saro workspace.
///
/// # Examples
///
/// ```
/// use saro_error::{SaroError, OracleError, OracleErrorKind};
///
/// let oracle_err = OracleError::new(OracleErrorKind::Transport("timed out".to_string()));
/// let err: SaroError = oracle_err.into();
/// assert!(format!("{}", err).contains("Transport failure"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SaroErrorKind {
    /// Oracle transport or API error
    #[from(OracleError)]
    Oracle(OracleError),
    /// Classification pipeline error
    #[from(ClassificationError)]
    Classification(ClassificationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Saro error with kind discrimination.
///
/// # Examples
///
/// ```
/// use saro_error::{SaroResult, ConfigError};
///
/// fn might_fail() -> SaroResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Saro Error: {}", _0)]
pub struct SaroError(Box<SaroErrorKind>);

impl SaroError {
    /// Create a new error from a kind.
    pub fn new(kind: SaroErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SaroErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SaroErrorKind
impl<T> From<T> for SaroError
where
    T: Into<SaroErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for saro operations.
///
/// # Examples
///
/// ```
/// use saro_error::{SaroResult, OracleError, OracleErrorKind};
///
/// fn fetch_reply() -> SaroResult<String> {
///     Err(OracleError::new(OracleErrorKind::EmptyCompletion))?
/// }
/// ```
pub type SaroResult<T> = std::result::Result<T, SaroError>;
