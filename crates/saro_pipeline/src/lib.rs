#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! Two-stage classification of SARO event narratives against the ORX
//! taxonomy.
//!
//! Stage one asks the oracle which level-1 (N1) risk categories apply to a
//! free-text incident narrative. Stage two then takes each selected
//! category's fixed level-2 (N2) candidate list from
//! [`saro_taxonomy`] and asks the oracle, once per category, which
//! candidates genuinely apply. Oracle output is advisory throughout: only
//! names that survive exact matching against the taxonomy ever reach the
//! final [`Classification`](saro_core::Classification).
//!
//! A failed stage-one call aborts the classification, since nothing can be
//! refined without categories. A failed stage-two call only empties that
//! one category's refinement, so a single hiccup cannot take down the rest
//! of the result.
//!
//! # Examples
//!
//! ```no_run
//! use saro_oracle::OpenAiClient;
//! use saro_pipeline::SaroClassifier;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = SaroClassifier::new(OpenAiClient::from_env()?);
//! let result = classifier
//!     .classify("La tesorería no pudo operar durante 3 horas por una falla de red")
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```

mod classifier;
mod extraction;
mod prompt;

pub use classifier::{DEFAULT_MODEL, SaroClassifier};
pub use extraction::extract_json_array;
