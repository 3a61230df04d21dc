//! Core data types for the SARO risk classification library.
//!
//! This crate provides the foundation data types shared by the oracle
//! adapter, the classification pipeline, and the HTTP layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classification;
mod message;
mod request;
mod role;

pub use classification::{Classification, RiskAssignment};
pub use message::Message;
pub use request::{CompletionRequest, CompletionRequestBuilder};
pub use role::Role;
