//! Static description of the mirrored shapes.
//!
//! Each mirrored type publishes a [`Binding`] naming its kind and its wire
//! fields. Tooling compares these against the generated frontend binding
//! file, so names here are the wire names, not the Rust field names.

use serde::Serialize;

/// Semantic type of a wire field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// JSON string
    Text,
    /// JSON integer
    Integer,
}

impl FieldType {
    /// Type spelling used by the frontend binding file
    pub fn ts_type(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "number",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// One declared field of a mirrored kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Wire name, e.g. `maxCols`
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Integer,
        }
    }
}

/// Shape of one mirrored kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// Kind name, identical to the frontend class name
    pub kind: &'static str,
    /// Declared fields in declaration order
    pub fields: &'static [FieldSpec],
}

impl Binding {
    /// Look up a declared field by wire name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wire names of all declared fields
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}
