//! Taxonomy inspection command handler.

use saro_taxonomy::{N1_CATALOG, ORX_RISKS, candidates_by_label, n2_union};
use serde_json::json;

/// Handle the `taxonomy` command
pub fn handle_taxonomy(labels: &[String], flat: bool) -> Result<(), Box<dyn std::error::Error>> {
    let output = if flat {
        // Flat union across the requested labels, or the whole catalog
        let union = if labels.is_empty() {
            n2_union(&N1_CATALOG)
        } else {
            n2_union(labels)
        };
        serde_json::to_string_pretty(&union)?
    } else if labels.is_empty() {
        // Every published (N1, N2) pair
        serde_json::to_string_pretty(ORX_RISKS.as_slice())?
    } else {
        // Per-label candidate buckets, in request order
        let buckets: Vec<_> = candidates_by_label(labels)
            .into_iter()
            .map(|(label, riesgos)| {
                json!({
                    "Riesgo_nivel_1": label,
                    "Riesgo_nivel_2": riesgos,
                })
            })
            .collect();
        serde_json::to_string_pretty(&buckets)?
    };
    println!("{output}");

    Ok(())
}
