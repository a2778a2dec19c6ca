//! Serialization boundary for the `technologies` columns.
//!
//! The store keeps technology lists as an opaque JSON-encoded string column;
//! the API decodes them into typed string sequences at read time. Corrupt
//! data surfaces as a `serde_json::Error` and fails the request instead of
//! leaking the raw column.

/// Encode a technology list into its stored string form.
pub fn encode(technologies: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(technologies)
}

/// Decode a stored `technologies` column.
pub fn decode(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Decode an optional `technologies` column; an absent column reads as an
/// empty list.
pub fn decode_optional(raw: Option<&str>) -> Result<Vec<String>, serde_json::Error> {
    match raw {
        Some(raw) => decode(raw),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_then_encode_round_trips() {
        let stored = r#"["Nuxt.js","Django","Python"]"#;
        let decoded = decode(stored).unwrap();
        assert_eq!(decoded, vec!["Nuxt.js", "Django", "Python"]);
        assert_eq!(encode(&decoded).unwrap(), stored);
    }

    #[test]
    fn test_decode_empty_list() {
        assert_eq!(decode("[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_decode_rejects_malformed_column() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"a":1}"#).is_err());
    }

    #[test]
    fn test_decode_optional_absent_is_empty() {
        assert_eq!(decode_optional(None).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_decode_optional_present_decodes() {
        let decoded = decode_optional(Some(r#"["PHP","Twig"]"#)).unwrap();
        assert_eq!(decoded, vec!["PHP", "Twig"]);
    }
}
