//! `cargo xtask normalize <KIND> <JSON | @FILE>`

use anyhow::Context;
use luckgui_shared::{DialogueFormatInfo, GamePreset, ShapeMirror, Source};
use serde_json::Value;

/// Normalize `input` as `kind` and return the wire form.
///
/// `input` is JSON text, or `@path` to read the JSON from a file. A JSON
/// array normalizes into a list.
pub fn run(kind: &str, input: &str) -> anyhow::Result<Value> {
    let text = match input.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading JSON input from {path}"))?,
        None => input.to_string(),
    };

    match kind {
        "DialogueFormatInfo" => normalize_as::<DialogueFormatInfo>(&text),
        "GamePreset" => normalize_as::<GamePreset>(&text),
        other => anyhow::bail!(
            "Unknown kind: {other} (expected one of: {})",
            luckgui_shared::bindings()
                .iter()
                .map(|b| b.kind)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn normalize_as<T: ShapeMirror>(text: &str) -> anyhow::Result<Value> {
    // Parse once; the decoded value is read with `from_value` so a JSON
    // string is never decoded a second time.
    let parsed = Source::Text(text)
        .resolve(T::BINDING.kind)
        .map_err(|e| {
            let (line, column) = e.position();
            anyhow::Error::new(e).context(format!("invalid JSON at line {line}, column {column}"))
        })?;
    if let Some(items) = parsed.as_array() {
        tracing::info!(kind = T::BINDING.kind, count = items.len(), "normalized list");
        return Ok(Value::Array(
            items.iter().map(|item| T::from_value(item).to_value()).collect(),
        ));
    }

    let value = T::from_value(&parsed);
    let missing = value.missing_fields();
    if !missing.is_empty() {
        tracing::info!(kind = T::BINDING.kind, ?missing, "fields absent after normalization");
    }
    Ok(value.to_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_inline_preset() {
        let out = run(
            "GamePreset",
            r#"{"name": "SP", "opcodeFile": "OPCODE.txt", "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(out, json!({"name": "SP", "opcodeFile": "OPCODE.txt"}));
    }

    #[test]
    fn test_normalize_list() {
        let out = run("DialogueFormatInfo", r#"[{"maxCols": 80}, "x"]"#).unwrap();
        assert_eq!(out, json!([{"maxCols": 80}, {}]));
    }

    #[test]
    fn test_normalize_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        std::fs::write(&path, r#"{"format": "plain", "maxCols": 80}"#).unwrap();

        let out = run("DialogueFormatInfo", &format!("@{}", path.display())).unwrap();
        assert_eq!(out, json!({"format": "plain", "maxCols": 80}));
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let err = run("GamePreset", "not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON at line 1, column "));
        assert!(format!("{err:#}").contains("Malformed input for GamePreset"));
    }

    #[test]
    fn test_json_string_input_is_not_decoded_twice() {
        assert_eq!(run("GamePreset", r#""LB_EN""#).unwrap(), json!({}));
        assert_eq!(run("GamePreset", r#""{\"name\":\"x\"}""#).unwrap(), json!({}));
        assert_eq!(run("GamePreset", r#"["LB_EN"]"#).unwrap(), json!([{}]));
    }

    #[test]
    fn test_unknown_kind() {
        let err = run("AppConfig", "{}").unwrap_err();
        assert!(err.to_string().contains("DialogueFormatInfo, GamePreset"));
    }
}
