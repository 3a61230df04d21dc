//! Utilities for extracting structured data from oracle replies.
//!
//! Oracle replies often wrap the requested JSON in explanatory chatter
//! despite being told not to. This module pulls the array payload out of
//! that noise.

/// Extract the JSON-array-shaped substring of an oracle reply.
///
/// Takes the greedy span from the first `[` to the last `]`, so chatter
/// before and after the payload is ignored. The span is not validated
/// here; it may still fail to parse as JSON, and when the reply contains
/// several arrays the span covers all of them. Returns `None` when the
/// reply has no such span.
///
/// # Examples
///
/// ```
/// use saro_pipeline::extract_json_array;
///
/// let reply = "Claro, aquí tienes:\n[\"Tecnología\"]\nEspero que ayude.";
/// assert_eq!(extract_json_array(reply), Some("[\"Tecnología\"]"));
/// assert_eq!(extract_json_array("sin corchetes"), None);
/// ```
pub fn extract_json_array(reply: &str) -> Option<&str> {
    let start = reply.find('[')?;
    let end = reply.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bare_array() {
        assert_eq!(extract_json_array(r#"["a", "b"]"#), Some(r#"["a", "b"]"#));
    }

    #[test]
    fn test_extracts_array_from_surrounding_chatter() {
        let reply = "Los eventos aplicables son: [\"Tecnología\", \"Legal\"] según el análisis.";
        assert_eq!(extract_json_array(reply), Some(r#"["Tecnología", "Legal"]"#));
    }

    #[test]
    fn test_extracts_multiline_arrays() {
        let reply = "Resultado:\n[\n  \"Conducta\"\n]\n";
        assert_eq!(extract_json_array(reply), Some("[\n  \"Conducta\"\n]"));
    }

    #[test]
    fn test_span_is_greedy_across_multiple_arrays() {
        let reply = "x [1, 2] y [3] z";
        assert_eq!(extract_json_array(reply), Some("[1, 2] y [3]"));
    }

    #[test]
    fn test_no_brackets_yields_none() {
        assert_eq!(extract_json_array("Esto es prosa sin estructura."), None);
    }

    #[test]
    fn test_reversed_brackets_yield_none() {
        assert_eq!(extract_json_array("cierra ] antes de abrir ["), None);
    }

    #[test]
    fn test_empty_array_is_extracted() {
        assert_eq!(extract_json_array("[]"), Some("[]"));
    }
}
