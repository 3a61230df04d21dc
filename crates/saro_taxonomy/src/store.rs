//! Lookup functions over the static taxonomy tables.

use crate::data::{N1_ALIASES, N1_CATALOG, ORX_RISKS};

/// Resolve an N1 name to its stored canonical spelling.
///
/// Names without an alias entry are assumed canonical and returned
/// unchanged, so this is total over arbitrary input.
///
/// ```
/// assert_eq!(saro_taxonomy::canonicalize("Personas"), "Gente");
/// assert_eq!(saro_taxonomy::canonicalize("Tecnología"), "Tecnología");
/// ```
pub fn canonicalize(n1: &str) -> &str {
    N1_ALIASES
        .iter()
        .find(|(alias, _)| *alias == n1)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(n1)
}

/// Collect the N2 risks stored under a canonical N1 name.
///
/// Comparison is against the stored spelling only; callers holding a label
/// in an unknown or legacy form compose this with [`canonicalize`].
/// Candidates come back in reference-set order, deduplicated. Unknown names
/// yield an empty list.
pub fn candidates_for(canonical_n1: &str) -> Vec<&'static str> {
    let mut candidates = Vec::new();
    for entry in &ORX_RISKS {
        if entry.n1 == canonical_n1 && !candidates.contains(&entry.n2) {
            candidates.push(entry.n2);
        }
    }
    candidates
}

/// Group N2 candidates by each input label, keyed by the label as given.
///
/// Each distinct label gets one bucket, in input order of first appearance;
/// normalization happens only on the lookup side, so a legacy spelling keys
/// its own bucket while still resolving the stored entries. Labels with no
/// matching entries are absent from the result.
pub fn candidates_by_label<S: AsRef<str>>(labels: &[S]) -> Vec<(String, Vec<&'static str>)> {
    let mut buckets: Vec<(String, Vec<&'static str>)> = Vec::new();
    for label in labels {
        let label = label.as_ref();
        if buckets.iter().any(|(seen, _)| seen == label) {
            continue;
        }
        let candidates = candidates_for(canonicalize(label));
        if !candidates.is_empty() {
            buckets.push((label.to_string(), candidates));
        }
    }
    buckets
}

/// Collect every N2 risk stored under any of the given N1 labels.
///
/// Labels are normalized before matching. The union is deduplicated and
/// sorted ascending.
pub fn n2_union<S: AsRef<str>>(labels: &[S]) -> Vec<&'static str> {
    let canonical: Vec<&str> = labels.iter().map(|label| canonicalize(label.as_ref())).collect();
    let mut union = Vec::new();
    for entry in &ORX_RISKS {
        if canonical.iter().any(|n1| *n1 == entry.n1) && !union.contains(&entry.n2) {
            union.push(entry.n2);
        }
    }
    union.sort_unstable();
    union
}

/// Whether a label names one of the offered N1 categories, under either
/// spelling convention.
pub fn is_known_n1(label: &str) -> bool {
    let canonical = canonicalize(label);
    N1_CATALOG.iter().any(|name| canonicalize(name) == canonical)
}
