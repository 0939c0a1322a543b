//! Inputs accepted by the shape mirror.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::MirrorError;

/// A value to normalize: nothing, JSON text, or an already parsed JSON value.
///
/// A parsed `Value::String` is handled like text and parsed again, the same
/// way the frontend binding treats any string source as encoded JSON.
#[derive(Debug, Clone, Copy, Default)]
pub enum Source<'a> {
    /// No source given; normalizes like an empty record
    #[default]
    Empty,
    /// JSON-encoded text
    Text(&'a str),
    /// Already parsed JSON
    Value(&'a Value),
}

impl<'a> Source<'a> {
    /// Whether this source has to go through the JSON parser
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Value(Value::String(_)))
    }

    /// Turn the source into a JSON value, parsing text when needed.
    ///
    /// `kind` names the mirrored type for the error message.
    pub fn resolve(self, kind: &'static str) -> Result<Cow<'a, Value>, MirrorError> {
        match self {
            Self::Empty => Ok(Cow::Owned(Value::Object(Map::new()))),
            Self::Text(text) => parse_text(text, kind).map(Cow::Owned),
            Self::Value(Value::String(text)) => parse_text(text, kind).map(Cow::Owned),
            Self::Value(value) => Ok(Cow::Borrowed(value)),
        }
    }
}

fn parse_text(text: &str, kind: &'static str) -> Result<Value, MirrorError> {
    serde_json::from_str(text).map_err(|e| MirrorError::malformed(kind, e))
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for Source<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<Option<&'a Value>> for Source<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Empty, Self::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_source_resolves_to_empty_record() {
        let resolved = Source::Empty.resolve("Test").unwrap();
        assert_eq!(*resolved, json!({}));
    }

    #[test]
    fn test_value_source_is_borrowed() {
        let value = json!({"format": "plain"});
        let resolved = Source::from(&value).resolve("Test").unwrap();
        assert!(matches!(resolved, Cow::Borrowed(_)));
    }

    #[test]
    fn test_string_value_is_parsed_as_text() {
        let value = Value::String(r#"{"maxCols": 80}"#.to_string());
        let source = Source::from(&value);

        assert!(source.is_textual());
        assert_eq!(*source.resolve("Test").unwrap(), json!({"maxCols": 80}));
    }

    #[test]
    fn test_invalid_text_is_malformed() {
        let err = Source::from("{not json").resolve("Test").unwrap_err();
        assert!(matches!(err, MirrorError::MalformedInput { kind: "Test", .. }));
    }

    #[test]
    fn test_missing_value_is_empty() {
        assert!(matches!(Source::from(None::<&Value>), Source::Empty));
    }
}
