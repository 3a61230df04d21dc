//! Classification output types.
//!
//! The field names on the wire are the Spanish names consumers of the
//! service already depend on, so the serde renames here are load-bearing.

use serde::{Deserialize, Serialize};

/// One classified risk: a selected level-1 category and its refined level-2
/// risks.
///
/// ```
/// use saro_core::RiskAssignment;
///
/// let risk = RiskAssignment {
///     n1: "Tecnología".to_string(),
///     n2: vec!["Fallo de red".to_string()],
/// };
/// let json = serde_json::to_value(&risk).unwrap();
/// assert_eq!(json["Riesgo_nivel_1"], "Tecnología");
/// assert_eq!(json["Riesgo_nivel_2"][0], "Fallo de red");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssignment {
    /// Level-1 category name, in the spelling the oracle selected
    #[serde(rename = "Riesgo_nivel_1")]
    pub n1: String,
    /// Refined level-2 risk names, sorted and deduplicated
    #[serde(rename = "Riesgo_nivel_2")]
    pub n2: Vec<String>,
}

/// The full result of classifying one event narrative.
///
/// `events_n1` echoes the level-1 selection exactly as the oracle returned
/// it, including alternate spellings. `risks` keeps those spellings too, but
/// only for categories whose refinement produced at least one level-2 risk,
/// so it can be shorter than the echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Level-1 event names as selected by the oracle, unnormalized
    #[serde(rename = "eventos_n1")]
    pub events_n1: Vec<String>,
    /// Refined risks per surviving selected category
    #[serde(rename = "riesgos")]
    pub risks: Vec<RiskAssignment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_spanish_field_names() {
        let classification = Classification {
            events_n1: vec!["Tecnología".to_string()],
            risks: vec![RiskAssignment {
                n1: "Tecnología".to_string(),
                n2: vec!["Fallo de red".to_string()],
            }],
        };
        let json = serde_json::to_value(&classification).unwrap();

        assert_eq!(json["eventos_n1"][0], "Tecnología");
        assert_eq!(json["riesgos"][0]["Riesgo_nivel_1"], "Tecnología");
        assert_eq!(json["riesgos"][0]["Riesgo_nivel_2"][0], "Fallo de red");
    }

    #[test]
    fn round_trips_through_json() {
        let classification = Classification {
            events_n1: vec!["Personas".to_string(), "Tecnología".to_string()],
            risks: vec![RiskAssignment {
                n1: "Personas".to_string(),
                n2: vec!["Relaciones laborales ineficaces".to_string()],
            }],
        };
        let json = serde_json::to_string(&classification).unwrap();
        let decoded: Classification = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, classification);
    }

    #[test]
    fn risks_may_be_fewer_than_selected_events() {
        let json = r#"{
            "eventos_n1": ["Personas", "Modelos"],
            "riesgos": [{"Riesgo_nivel_1": "Personas", "Riesgo_nivel_2": ["Relaciones laborales ineficaces"]}]
        }"#;
        let decoded: Classification = serde_json::from_str(json).unwrap();

        assert_eq!(decoded.events_n1.len(), 2);
        assert_eq!(decoded.risks.len(), 1);
        assert_eq!(decoded.risks[0].n1, "Personas");
    }
}
