#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! The ORX operational-risk reference taxonomy.
//!
//! Holds the fixed set of level-1 (N1) / level-2 (N2) risk pairings that
//! SARO event narratives are classified against, together with the
//! normalization table bridging the two historical spellings of some N1
//! names. The data is compiled in and immutable, so lookups are plain
//! functions over static tables and safe to call from any number of
//! concurrent requests.
//!
//! Category names are the Spanish ORX names; they are wire format, not
//! display strings, so they are never translated or re-cased here.
//!
//! # Examples
//!
//! ```
//! use saro_taxonomy::{candidates_for, canonicalize};
//!
//! // "Personas" is a legacy spelling of the stored "Gente" category.
//! let candidates = candidates_for(canonicalize("Personas"));
//! assert_eq!(candidates.len(), 3);
//! ```

mod data;
mod store;

pub use data::{N1_CATALOG, ORX_RISKS, RiskEntry};
pub use store::{candidates_by_label, candidates_for, canonicalize, is_known_n1, n2_union};
