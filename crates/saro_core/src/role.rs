//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message sender in a completion request.
///
/// Serialized lowercase, matching the OpenAI-compatible chat wire format.
///
/// # Examples
///
/// ```
/// use saro_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry the narrative and the candidate lists
    User,
    /// Assistant messages are from the oracle
    Assistant,
}
