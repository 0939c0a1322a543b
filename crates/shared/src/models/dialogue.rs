use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::binding::{Binding, FieldSpec};
use crate::mirror::{deserialize_permissive, read_field, write_field, ShapeMirror};

/// Dialogue format detected in a script file, with its wrap width
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueFormatInfo {
    /// Formatting-mode identifier, e.g. `AIR-type (JAP, ENG, CN)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Maximum column width for wrapped text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cols: Option<i64>,
}

impl DialogueFormatInfo {
    pub const FORMAT: &'static str = "format";
    pub const MAX_COLS: &'static str = "maxCols";

    pub fn new(format: impl Into<String>, max_cols: i64) -> Self {
        Self {
            format: Some(format.into()),
            max_cols: Some(max_cols),
        }
    }
}

impl ShapeMirror for DialogueFormatInfo {
    const BINDING: Binding = Binding {
        kind: "DialogueFormatInfo",
        fields: &[
            FieldSpec::text(Self::FORMAT),
            FieldSpec::integer(Self::MAX_COLS),
        ],
    };

    fn from_record(record: &Map<String, Value>) -> Self {
        let kind = Self::BINDING.kind;
        Self {
            format: read_field(record, kind, Self::FORMAT),
            max_cols: read_field(record, kind, Self::MAX_COLS),
        }
    }

    fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        write_field(&mut record, Self::FORMAT, self.format.as_ref());
        write_field(&mut record, Self::MAX_COLS, self.max_cols.as_ref());
        record
    }
}

impl<'de> Deserialize<'de> for DialogueFormatInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_permissive(deserializer)
    }
}
