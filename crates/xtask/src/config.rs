//! xtask configuration

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

const DEFAULT_MODELS_TS: &str = "frontend/wailsjs/go/models.ts";
const DEFAULT_NAMESPACE: &str = "main";

/// Configuration loaded from environment (after `.env` files are applied)
#[derive(Debug, Clone)]
pub struct XtaskConfig {
    /// Generated frontend binding file
    pub models_ts: PathBuf,
    /// Namespace the mirrored classes are declared in
    pub namespace: String,
}

impl XtaskConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("LUCKGUI_MODELS_TS").ok(),
            env::var("LUCKGUI_BINDINGS_NAMESPACE").ok(),
        )
    }

    fn from_vars(models_ts: Option<String>, namespace: Option<String>) -> Result<Self> {
        let models_ts = models_ts
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MODELS_TS.to_string());

        let namespace = namespace
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        anyhow::ensure!(
            namespace.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "LUCKGUI_BINDINGS_NAMESPACE must be an identifier, got {namespace:?}"
        );

        Ok(Self {
            models_ts: resolve_from_root(Path::new(&models_ts)),
            namespace,
        })
    }
}

/// Workspace root; xtask lives in `crates/xtask`.
pub fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// Load `.env.local` then `.env` from the workspace root, if present.
pub fn load_dotenv_from_repo_root() {
    let root = repo_root();
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn resolve_from_root(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root().join(path)
    }
}
