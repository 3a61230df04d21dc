//! Error types for the SARO risk classification library.
//!
//! This crate provides the foundation error types used throughout the saro
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use saro_error::{SaroResult, OracleError, OracleErrorKind};
//!
//! fn ask_oracle() -> SaroResult<String> {
//!     Err(OracleError::new(OracleErrorKind::Transport(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! match ask_oracle() {
//!     Ok(reply) => println!("Got: {}", reply),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classification;
mod config;
mod error;
mod oracle;
mod server;

pub use classification::{ClassificationError, ClassificationErrorKind};
pub use config::ConfigError;
pub use error::{SaroError, SaroErrorKind, SaroResult};
pub use oracle::{OracleError, OracleErrorKind};
pub use server::{ServerError, ServerErrorKind};
