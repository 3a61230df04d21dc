//! Classification request body.

use serde::Deserialize;

/// Body of a `POST /classify` request.
///
/// The narrative may arrive under `descripcion` or under one of the two
/// legacy keys older callers still send. [`narrative`] resolves the keys
/// in priority order.
///
/// [`narrative`]: ClassifyRequest::narrative
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClassifyRequest {
    /// The SARO event narrative
    pub descripcion: Option<String>,
    /// Legacy key for the narrative
    pub descripcion_saro: Option<String>,
    /// Legacy key for the narrative
    pub texto: Option<String>,
    /// Optional model override
    pub model: Option<String>,
}

impl ClassifyRequest {
    /// The narrative under whichever key carries one.
    ///
    /// `descripcion` wins over `descripcion_saro`, which wins over
    /// `texto`; a key holding an empty string is treated as absent, so a
    /// later key can still supply the narrative.
    pub fn narrative(&self) -> Option<&str> {
        [&self.descripcion, &self.descripcion_saro, &self.texto]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|value| !value.is_empty())
    }
}
