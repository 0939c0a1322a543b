use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::binding::{Binding, FieldSpec};
use crate::mirror::{deserialize_permissive, read_field, write_field, ShapeMirror};

/// Per-game settings used when decompiling or importing scripts.
///
/// The four fields are independent; a preset without a plugin file or game
/// flag is still a valid value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePreset {
    /// Human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the opcode definition file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opcode_file: Option<String>,
    /// Path to the plugin file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_file: Option<String>,
    /// Flag naming the target game, e.g. `LB_EN`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_flag: Option<String>,
}

impl GamePreset {
    pub const NAME: &'static str = "name";
    pub const OPCODE_FILE: &'static str = "opcodeFile";
    pub const PLUGIN_FILE: &'static str = "pluginFile";
    pub const GAME_FLAG: &'static str = "gameFlag";

    pub fn new(
        name: impl Into<String>,
        opcode_file: impl Into<String>,
        plugin_file: impl Into<String>,
        game_flag: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            opcode_file: Some(opcode_file.into()),
            plugin_file: Some(plugin_file.into()),
            game_flag: Some(game_flag.into()),
        }
    }
}

impl ShapeMirror for GamePreset {
    const BINDING: Binding = Binding {
        kind: "GamePreset",
        fields: &[
            FieldSpec::text(Self::NAME),
            FieldSpec::text(Self::OPCODE_FILE),
            FieldSpec::text(Self::PLUGIN_FILE),
            FieldSpec::text(Self::GAME_FLAG),
        ],
    };

    fn from_record(record: &Map<String, Value>) -> Self {
        let kind = Self::BINDING.kind;
        Self {
            name: read_field(record, kind, Self::NAME),
            opcode_file: read_field(record, kind, Self::OPCODE_FILE),
            plugin_file: read_field(record, kind, Self::PLUGIN_FILE),
            game_flag: read_field(record, kind, Self::GAME_FLAG),
        }
    }

    fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        write_field(&mut record, Self::NAME, self.name.as_ref());
        write_field(&mut record, Self::OPCODE_FILE, self.opcode_file.as_ref());
        write_field(&mut record, Self::PLUGIN_FILE, self.plugin_file.as_ref());
        write_field(&mut record, Self::GAME_FLAG, self.game_flag.as_ref());
        record
    }
}

impl<'de> Deserialize<'de> for GamePreset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_permissive(deserializer)
    }
}
