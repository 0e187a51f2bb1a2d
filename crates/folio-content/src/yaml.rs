//! YAML parsing for content and navigation documents.
//!
//! Documents are parsed with `serde_yaml`. Empty text is rejected up front so
//! that callers get a dedicated error instead of a generic type mismatch.

use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Error returned when document text cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Document text is empty or whitespace only.
    #[error("Document is empty")]
    Empty,
    /// Document text is not valid YAML or does not have the expected shape.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse a whole document from YAML text.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] for blank input and [`ParseError::Yaml`] for
/// malformed YAML or a top-level value of the wrong shape.
pub(crate) fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ParseError> {
    if content.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(serde_yaml::from_str(content)?)
}

/// Textual form of a scalar YAML value.
///
/// Strings are returned as-is; numbers and booleans use their display form.
/// Null, sequences and mappings have no textual form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Truthiness of a YAML value for flag fields.
///
/// `false`, `null`, `0` and the empty string are false; everything else is true.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_parse_yaml_empty_is_error() {
        let result: Result<BTreeMap<String, String>, _> = parse_yaml("");
        assert!(matches!(result, Err(ParseError::Empty)));

        let result: Result<BTreeMap<String, String>, _> = parse_yaml("   \n\t  ");
        assert!(matches!(result, Err(ParseError::Empty)));
    }

    #[test]
    fn test_parse_yaml_invalid_is_error() {
        let result: Result<BTreeMap<String, String>, _> = parse_yaml("title: [invalid yaml");
        assert!(matches!(result, Err(ParseError::Yaml(_))));
    }

    #[test]
    fn test_parse_yaml_block_scalar() {
        let map: BTreeMap<String, String> =
            parse_yaml("body: |\n  This is a\n  multiline body").unwrap();
        assert_eq!(map["body"], "This is a\nmultiline body");
    }

    #[test]
    fn test_parse_yaml_keeps_trailing_block_newline() {
        let map: BTreeMap<String, String> = parse_yaml("body: |\n  Last line\n").unwrap();
        assert_eq!(map["body"], "Last line\n");
    }

    #[test]
    fn test_parse_yaml_indented_root_mapping() {
        let map: BTreeMap<String, String> = parse_yaml("  title: Home\n  state: Ohio\n").unwrap();
        assert_eq!(map["title"], "Home");
        assert_eq!(map["state"], "Ohio");
    }

    #[test]
    fn test_scalar_text_variants() {
        assert_eq!(scalar_text(&Value::from("hello")), Some("hello".to_owned()));
        assert_eq!(scalar_text(&Value::from(2024)), Some("2024".to_owned()));
        assert_eq!(scalar_text(&Value::from(true)), Some("true".to_owned()));
        assert_eq!(scalar_text(&Value::Null), None);
        assert_eq!(scalar_text(&Value::Sequence(Vec::new())), None);
    }

    #[test]
    fn test_is_truthy_variants() {
        assert!(is_truthy(&Value::from(true)));
        assert!(is_truthy(&Value::from("yes")));
        assert!(is_truthy(&Value::from(1)));
        assert!(!is_truthy(&Value::from(false)));
        assert!(!is_truthy(&Value::from("")));
        assert!(!is_truthy(&Value::from(0)));
        assert!(!is_truthy(&Value::Null));
    }
}
