//! The two-stage classifier tying taxonomy, prompts, and oracle together.

use crate::extraction::extract_json_array;
use crate::prompt;
use saro_core::{Classification, CompletionRequest, RiskAssignment};
use saro_error::{ClassificationError, ClassificationErrorKind, SaroResult};
use saro_oracle::Oracle;
use saro_taxonomy::{candidates_for, canonicalize, is_known_n1};
use tracing::{debug, instrument, warn};

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

// Classification is not generative; a pinned temperature keeps repeated
// runs over the same narrative reproducible.
const TEMPERATURE: f32 = 0.0;

/// Classifies SARO event narratives against the ORX taxonomy.
///
/// The oracle is injected at construction, so tests can substitute a
/// deterministic stub for the HTTP client. One classification issues a
/// single stage-one call followed by one stage-two call per selected
/// category that has N2 candidates, strictly in selection order.
///
/// By default the stage-one selection is echoed as received, including
/// category names outside the offered catalog; [`with_strict_selection`]
/// opts into dropping those.
///
/// [`with_strict_selection`]: SaroClassifier::with_strict_selection
#[derive(Debug, Clone)]
pub struct SaroClassifier<O: Oracle> {
    oracle: O,
    default_model: String,
    strict_selection: bool,
}

impl<O: Oracle> SaroClassifier<O> {
    /// Create a classifier over the given oracle with the default model.
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            default_model: DEFAULT_MODEL.to_string(),
            strict_selection: false,
        }
    }

    /// Set the model used by [`classify`](SaroClassifier::classify).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Drop stage-one categories that match no offered catalog name under
    /// normalization, instead of echoing them as received.
    ///
    /// Taxonomy membership is otherwise enforced only at stage two, and
    /// existing consumers read the unfiltered echo, so this is opt-in.
    pub fn with_strict_selection(mut self) -> Self {
        self.strict_selection = true;
        self
    }

    /// Classify a narrative with the configured default model.
    ///
    /// # Errors
    ///
    /// Fails if the narrative is blank or if the stage-one oracle call
    /// fails or returns an unusable reply.
    #[instrument(skip(self, narrative))]
    pub async fn classify(&self, narrative: &str) -> SaroResult<Classification> {
        self.classify_with_model(narrative, &self.default_model).await
    }

    /// Classify a narrative with an explicit model.
    ///
    /// # Errors
    ///
    /// Fails if the narrative is blank or if the stage-one oracle call
    /// fails or returns an unusable reply. Stage-two problems never fail
    /// the classification; they leave the affected category without risks.
    #[instrument(skip(self, narrative), fields(narrative_len = narrative.len()))]
    pub async fn classify_with_model(
        &self,
        narrative: &str,
        model: &str,
    ) -> SaroResult<Classification> {
        let narrative = narrative.trim();
        if narrative.is_empty() {
            return Err(ClassificationError::new(ClassificationErrorKind::EmptyInput).into());
        }

        let selection = self.select_categories(narrative, model).await?;
        debug!(categories = selection.len(), "Stage-one selection complete");

        let mut risks = Vec::new();
        for label in &selection {
            let candidates = candidates_for(canonicalize(label));
            if candidates.is_empty() {
                debug!(label = %label, "Category has no N2 candidates; skipping refinement");
                continue;
            }

            let mut refined = self.refine_category(narrative, label, &candidates, model).await;
            if refined.is_empty() {
                continue;
            }
            refined.sort_unstable();
            refined.dedup();
            risks.push(RiskAssignment {
                n1: label.clone(),
                n2: refined,
            });
        }

        Ok(Classification {
            events_n1: selection,
            risks,
        })
    }

    /// Stage one: ask the oracle which N1 categories apply.
    ///
    /// The reply must contain a JSON array; elements that are not strings
    /// are dropped with a warning rather than aborting the whole
    /// classification.
    #[instrument(skip(self, narrative))]
    async fn select_categories(&self, narrative: &str, model: &str) -> SaroResult<Vec<String>> {
        let request = CompletionRequest::new(
            model,
            prompt::SELECTION_SYSTEM_PROMPT,
            prompt::selection_prompt(narrative),
            TEMPERATURE,
        );
        let reply = self.oracle.complete(&request).await?;

        let array = extract_json_array(&reply).ok_or_else(|| {
            ClassificationError::new(ClassificationErrorKind::OracleFormat(preview(&reply)))
        })?;
        let value: serde_json::Value = serde_json::from_str(array).map_err(|e| {
            ClassificationError::new(ClassificationErrorKind::OracleFormat(format!(
                "{}: {}",
                e,
                preview(array)
            )))
        })?;
        let items = value.as_array().ok_or_else(|| {
            ClassificationError::new(ClassificationErrorKind::OracleShape(preview(array)))
        })?;

        let mut selection = Vec::new();
        for item in items {
            match item.as_str() {
                Some(name) => selection.push(name.to_string()),
                None => warn!(value = %item, "Dropping non-string element from selection"),
            }
        }

        if self.strict_selection {
            selection.retain(|label| {
                let known = is_known_n1(label);
                if !known {
                    warn!(label = %label, "Dropping category outside the offered catalog");
                }
                known
            });
        }

        Ok(selection)
    }

    /// Stage two: narrow one category's candidate list to what applies.
    ///
    /// Failures here are soft. An oracle error, a reply without an array,
    /// or undecodable JSON all come back as an empty refinement, and every
    /// surviving name must match a candidate exactly.
    #[instrument(skip(self, narrative, candidates), fields(label = %label, candidates = candidates.len()))]
    async fn refine_category(
        &self,
        narrative: &str,
        label: &str,
        candidates: &[&str],
        model: &str,
    ) -> Vec<String> {
        let request = CompletionRequest::new(
            model,
            prompt::REFINEMENT_SYSTEM_PROMPT,
            prompt::refinement_prompt(narrative, label, candidates),
            TEMPERATURE,
        );

        let reply = match self.oracle.complete(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(label = %label, error = %e, "Refinement call failed; treating as empty");
                return Vec::new();
            }
        };

        let Some(array) = extract_json_array(&reply) else {
            warn!(label = %label, "No JSON array in refinement reply; treating as empty");
            return Vec::new();
        };
        let names: Vec<String> = match serde_json::from_str::<serde_json::Value>(array) {
            Ok(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            Ok(_) => {
                warn!(label = %label, "Refinement reply is not a JSON array; treating as empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(label = %label, error = %e, "Undecodable refinement reply; treating as empty");
                return Vec::new();
            }
        };

        // Only taxonomy-authentic names may reach the result.
        let refined: Vec<String> = names
            .into_iter()
            .filter(|name| {
                let known = candidates.iter().any(|candidate| *candidate == name.as_str());
                if !known {
                    warn!(label = %label, name = %name, "Dropping name outside the candidate list");
                }
                known
            })
            .collect();

        debug!(label = %label, refined = refined.len(), "Refinement complete");
        refined
    }
}

fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}
