use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bindings_check;
mod config;
mod normalize;

use config::XtaskConfig;

const USAGE: &str = "Usage: cargo xtask <command>

Commands:
  bindings-check [PATH]         Compare the frontend binding file with the Rust shapes
  normalize <KIND> <JSON|@FILE> Normalize JSON as DialogueFormatInfo or GamePreset";

fn main() -> anyhow::Result<()> {
    config::load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xtask=info,luckgui_shared=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("bindings-check") => run_bindings_check(args.next().map(PathBuf::from)),
        Some("normalize") => {
            let (Some(kind), Some(input)) = (args.next(), args.next()) else {
                anyhow::bail!("normalize needs <KIND> and <JSON|@FILE>\n\n{USAGE}");
            };
            let value = normalize::run(&kind, &input)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!("{USAGE}"),
    }
}

fn run_bindings_check(path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = XtaskConfig::from_env()?;
    let path = path.unwrap_or(config.models_ts);

    tracing::info!(path = %path.display(), namespace = %config.namespace, "checking bindings");
    let mismatches =
        bindings_check::check_file(&path, &config.namespace, luckgui_shared::bindings())?;

    if mismatches.is_empty() {
        tracing::info!(
            kinds = luckgui_shared::bindings().len(),
            "frontend bindings match the Rust shapes"
        );
        return Ok(());
    }

    for mismatch in &mismatches {
        tracing::error!("{mismatch}");
    }
    anyhow::bail!("{} binding mismatch(es) in {}", mismatches.len(), path.display())
}
