//! Prompt construction for both classification stages.
//!
//! The wording here is part of the pipeline's observable behavior: the
//! oracle is steered toward bare JSON arrays, and the category and
//! candidate lists enumerate exactly the names the validation layer will
//! accept afterwards. Prompts are in Spanish to match the narratives and
//! the taxonomy.

use saro_taxonomy::N1_CATALOG;

/// System prompt for the stage-one category selection call.
pub(crate) const SELECTION_SYSTEM_PROMPT: &str = "Eres un analista experto en riesgo \
     operacional. Devuelve solo un array JSON con los eventos N1.";

/// System prompt for the stage-two refinement calls.
pub(crate) const REFINEMENT_SYSTEM_PROMPT: &str = "Eres un analista experto en riesgo \
     operacional. Identificas riesgos N2 relevantes según el contexto del evento. Devuelve \
     solo un array JSON.";

/// Build the stage-one user prompt enumerating every offered N1 category.
pub(crate) fn selection_prompt(narrative: &str) -> String {
    let catalog = N1_CATALOG
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\nIdentifica qué Eventos de Riesgo Nivel 1 (N1) de ORX aplican al siguiente evento SARO.\n\
         \n\
         Evento: \"{narrative}\"\n\
         \n\
         Eventos de Riesgo N1 disponibles:\n\
         {catalog}\n\
         \n\
         Devuelve únicamente un array JSON con los nombres de los eventos que aplican:\n\
         [\"Evento 1\", \"Evento 2\"]\n\
         \n\
         Reglas:\n\
         - Usa exactamente los nombres de la lista.\n\
         - Incluye solo los eventos que aplican.\n\
         - Devuelve solo un array JSON, sin texto adicional.\n"
    )
}

/// Build the stage-two user prompt for one category and its N2 candidates.
pub(crate) fn refinement_prompt(narrative: &str, n1: &str, candidates: &[&str]) -> String {
    let candidate_list = candidates
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Dado el siguiente evento SARO y una lista de riesgos N2 del tipo \"{n1}\", \n\
         identifica cuáles de estos riesgos N2 son realmente aplicables al evento.\n\
         \n\
         Evento SARO:\n\
         \"{narrative}\"\n\
         \n\
         Riesgo N1: {n1}\n\
         \n\
         Riesgos N2 disponibles:\n\
         {candidate_list}\n\
         \n\
         Devuelve únicamente un array JSON con los nombres exactos de los riesgos N2 que \
         aplican al evento:\n\
         [\"Riesgo N2 1\", \"Riesgo N2 2\"]\n\
         \n\
         Reglas:\n\
         - Usa exactamente los nombres de la lista.\n\
         - Incluye solo los riesgos que son realmente relevantes para el evento descrito.\n\
         - Devuelve solo un array JSON, sin texto adicional."
    )
}
