//! Compare the generated frontend binding file with the mirrored shapes.

use std::fmt;
use std::path::Path;

use anyhow::Context;
use luckgui_shared::Binding;
use regex_lite::Regex;

/// A class found in the binding file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredClass {
    pub namespace: String,
    pub name: String,
    /// `(field, ts type)` in declaration order
    pub fields: Vec<(String, String)>,
}

impl DeclaredClass {
    fn field_type(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, ty)| ty.as_str())
    }
}

/// One difference between the binding file and the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    MissingClass {
        kind: String,
    },
    UnexpectedClass {
        kind: String,
    },
    MissingField {
        kind: String,
        field: String,
    },
    UnexpectedField {
        kind: String,
        field: String,
    },
    TypeMismatch {
        kind: String,
        field: String,
        expected: &'static str,
        found: String,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClass { kind } => write!(f, "{kind}: class not declared"),
            Self::UnexpectedClass { kind } => write!(f, "{kind}: class has no Rust mirror"),
            Self::MissingField { kind, field } => write!(f, "{kind}.{field}: field not declared"),
            Self::UnexpectedField { kind, field } => {
                write!(f, "{kind}.{field}: field has no Rust mirror")
            }
            Self::TypeMismatch {
                kind,
                field,
                expected,
                found,
            } => write!(f, "{kind}.{field}: expected `{expected}`, found `{found}`"),
        }
    }
}

/// Extract every exported class and its field declarations.
///
/// Classes outside any `export namespace` block get an empty namespace.
pub fn parse_declarations(source: &str) -> anyhow::Result<Vec<DeclaredClass>> {
    let namespace_re = Regex::new(r"export\s+namespace\s+(\w+)\s*\{")?;
    let class_re = Regex::new(r"export\s+class\s+(\w+)[^{]*\{")?;
    let field_re = Regex::new(r"(?m)^\s*(\w+)\??\s*:\s*([^;=(){]+?)\s*;\s*$")?;

    let namespaces: Vec<(usize, String)> = namespace_re
        .captures_iter(source)
        .filter_map(|c| Some((c.get(0)?.start(), c.get(1)?.as_str().to_string())))
        .collect();
    let namespace_at = |offset: usize| {
        namespaces
            .iter()
            .rev()
            .find(|(start, _)| *start <= offset)
            .map(|(_, name)| name.clone())
            .unwrap_or_default()
    };

    let class_spans: Vec<(usize, usize, String)> = class_re
        .captures_iter(source)
        .filter_map(|c| {
            let whole = c.get(0)?;
            Some((whole.start(), whole.end(), c.get(1)?.as_str().to_string()))
        })
        .collect();

    let classes = class_spans
        .iter()
        .enumerate()
        .map(|(i, (start, body_start, name))| {
            let mut body_end = class_spans
                .get(i + 1)
                .map_or(source.len(), |(next, _, _)| *next);
            // A namespace opened between two classes closes this one.
            if let Some((ns_start, _)) = namespaces
                .iter()
                .find(|(ns_start, _)| ns_start > body_start && *ns_start < body_end)
            {
                body_end = *ns_start;
            }
            let body = &source[*body_start..body_end];
            let fields = field_re
                .captures_iter(body)
                .filter_map(|c| {
                    Some((
                        c.get(1)?.as_str().to_string(),
                        c.get(2)?.as_str().to_string(),
                    ))
                })
                .collect();

            DeclaredClass {
                namespace: namespace_at(*start),
                name: name.clone(),
                fields,
            }
        })
        .collect();

    Ok(classes)
}

/// Compare the classes of one namespace against the registry.
pub fn compare(
    declared: &[DeclaredClass],
    namespace: &str,
    registry: &[Binding],
) -> Vec<Mismatch> {
    let in_namespace: Vec<&DeclaredClass> = declared
        .iter()
        .filter(|c| c.namespace == namespace)
        .collect();

    let mut mismatches = Vec::new();
    for binding in registry {
        let Some(class) = in_namespace.iter().find(|c| c.name == binding.kind) else {
            mismatches.push(Mismatch::MissingClass {
                kind: binding.kind.to_string(),
            });
            continue;
        };

        for spec in binding.fields {
            match class.field_type(spec.name) {
                None => mismatches.push(Mismatch::MissingField {
                    kind: binding.kind.to_string(),
                    field: spec.name.to_string(),
                }),
                Some(found) if found != spec.ty.ts_type() => {
                    mismatches.push(Mismatch::TypeMismatch {
                        kind: binding.kind.to_string(),
                        field: spec.name.to_string(),
                        expected: spec.ty.ts_type(),
                        found: found.to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        for (field, _) in &class.fields {
            if binding.field(field).is_none() {
                mismatches.push(Mismatch::UnexpectedField {
                    kind: binding.kind.to_string(),
                    field: field.clone(),
                });
            }
        }
    }

    for class in &in_namespace {
        if !registry.iter().any(|b| b.kind == class.name) {
            mismatches.push(Mismatch::UnexpectedClass {
                kind: class.name.clone(),
            });
        }
    }

    mismatches
}

/// Read the binding file and compare it against the registry.
pub fn check_file(path: &Path, namespace: &str, registry: &[Binding]) -> anyhow::Result<Vec<Mismatch>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading binding file {}", path.display()))?;
    let declared = parse_declarations(&source)?;
    tracing::debug!(
        path = %path.display(),
        classes = declared.len(),
        "parsed binding file"
    );
    Ok(compare(&declared, namespace, registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luckgui_shared::bindings;

    const MODELS_TS: &str = r#"export namespace main {

	export class DialogueFormatInfo {
	    format: string;
	    maxCols: number;

	    static createFrom(source: any = {}) {
	        return new DialogueFormatInfo(source);
	    }

	    constructor(source: any = {}) {
	        if ('string' === typeof source) source = JSON.parse(source);
	        this.format = source["format"];
	        this.maxCols = source["maxCols"];
	    }
	}
	export class GamePreset {
	    name: string;
	    opcodeFile: string;
	    pluginFile: string;
	    gameFlag: string;

	    static createFrom(source: any = {}) {
	        return new GamePreset(source);
	    }

	    constructor(source: any = {}) {
	        if ('string' === typeof source) source = JSON.parse(source);
	        this.name = source["name"];
	        this.opcodeFile = source["opcodeFile"];
	        this.pluginFile = source["pluginFile"];
	        this.gameFlag = source["gameFlag"];
	    }
	}

}
"#;

    #[test]
    fn test_parse_generated_models() {
        let declared = parse_declarations(MODELS_TS).unwrap();

        assert_eq!(declared.len(), 2);
        assert_eq!(declared[0].namespace, "main");
        assert_eq!(declared[0].name, "DialogueFormatInfo");
        assert_eq!(
            declared[0].fields,
            vec![
                ("format".to_string(), "string".to_string()),
                ("maxCols".to_string(), "number".to_string()),
            ]
        );
        assert_eq!(declared[1].fields.len(), 4);
    }

    #[test]
    fn test_generated_models_match_registry() {
        let declared = parse_declarations(MODELS_TS).unwrap();
        assert!(compare(&declared, "main", bindings()).is_empty());
    }

    #[test]
    fn test_wrong_namespace_reports_missing_classes() {
        let declared = parse_declarations(MODELS_TS).unwrap();
        let mismatches = compare(&declared, "app", bindings());
        assert_eq!(
            mismatches,
            vec![
                Mismatch::MissingClass {
                    kind: "DialogueFormatInfo".into()
                },
                Mismatch::MissingClass {
                    kind: "GamePreset".into()
                },
            ]
        );
    }

    #[test]
    fn test_drifted_models_are_reported() {
        let drifted = MODELS_TS
            .replace("maxCols: number;", "maxCols: string;")
            .replace("gameFlag: string;", "gameFlags: string;")
            .replace(
                "export class GamePreset {",
                "export class ScriptOptions {\n\t    charset: string;\n\t}\n\texport class GamePreset {",
            );
        let mismatches = compare(&parse_declarations(&drifted).unwrap(), "main", bindings());

        assert!(mismatches.contains(&Mismatch::TypeMismatch {
            kind: "DialogueFormatInfo".into(),
            field: "maxCols".into(),
            expected: "number",
            found: "string".into(),
        }));
        assert!(mismatches.contains(&Mismatch::MissingField {
            kind: "GamePreset".into(),
            field: "gameFlag".into(),
        }));
        assert!(mismatches.contains(&Mismatch::UnexpectedField {
            kind: "GamePreset".into(),
            field: "gameFlags".into(),
        }));
        assert!(mismatches.contains(&Mismatch::UnexpectedClass {
            kind: "ScriptOptions".into(),
        }));
        assert_eq!(mismatches.len(), 4);
    }

    #[test]
    fn test_classes_split_across_namespaces() {
        let source = "export namespace main {\n\texport class GamePreset {\n\t    name: string;\n\t}\n}\nexport namespace frontend {\n\texport class FileFilter {\n\t    Pattern: string;\n\t}\n}\n";
        let declared = parse_declarations(source).unwrap();

        assert_eq!(declared.len(), 2);
        assert_eq!(declared[0].namespace, "main");
        assert_eq!(declared[0].fields.len(), 1);
        assert_eq!(declared[1].namespace, "frontend");
        assert_eq!(declared[1].name, "FileFilter");
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = Mismatch::TypeMismatch {
            kind: "DialogueFormatInfo".into(),
            field: "maxCols".into(),
            expected: "number",
            found: "string".into(),
        };
        assert_eq!(
            mismatch.to_string(),
            "DialogueFormatInfo.maxCols: expected `number`, found `string`"
        );
    }

    #[test]
    fn test_check_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.ts");
        std::fs::write(&path, MODELS_TS).unwrap();

        let mismatches = check_file(&path, "main", bindings()).unwrap();
        assert!(mismatches.is_empty());
        assert!(check_file(&dir.path().join("missing.ts"), "main", bindings()).is_err());
    }
}
