//! Classification pipeline error types.

/// Specific error conditions for the classification pipeline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ClassificationErrorKind {
    /// Narrative is blank after trimming
    #[display("SARO event narrative cannot be empty")]
    EmptyInput,

    /// Stage-1 oracle reply contained no bracketed JSON array, or the
    /// bracketed substring was not valid JSON
    #[display("No valid JSON array found in oracle reply: {}", _0)]
    OracleFormat(String),

    /// Stage-1 oracle reply parsed as JSON, but not as an array
    #[display("Oracle reply is not a JSON array: {}", _0)]
    OracleShape(String),
}

/// Error type for classification operations.
///
/// Only Stage-1 selection raises these; Stage-2 refinement degrades to an
/// empty result so a single category cannot abort the whole classification.
///
/// # Examples
///
/// ```
/// use saro_error::{ClassificationError, ClassificationErrorKind};
///
/// let err = ClassificationError::new(ClassificationErrorKind::EmptyInput);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Classification Error: {} at line {} in {}", kind, line, file)]
pub struct ClassificationError {
    /// The specific error condition
    pub kind: ClassificationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ClassificationError {
    /// Create a new ClassificationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClassificationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
