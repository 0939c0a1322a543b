//! Error type for the shape mirror
//!
//! The mirror is deliberately permissive: missing or wrong-typed fields are
//! tolerated, so the only failure is text that is not valid JSON.

use thiserror::Error;

/// Error raised while normalizing a source into a mirrored value
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Textual source could not be parsed as JSON
    #[error("Malformed input for {kind}: {source}")]
    MalformedInput {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl MirrorError {
    /// Create a malformed input error for the given mirrored kind
    pub fn malformed(kind: &'static str, source: serde_json::Error) -> Self {
        Self::MalformedInput { kind, source }
    }

    /// The mirrored kind that was being normalized
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput { kind, .. } => kind,
        }
    }

    /// Line and column of the JSON syntax error, 1-based
    pub fn position(&self) -> (usize, usize) {
        match self {
            Self::MalformedInput { source, .. } => (source.line(), source.column()),
        }
    }
}
