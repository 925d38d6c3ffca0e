//! Stylometric Feature Extraction - Main Entry Point

use clap::Parser;
use stylo_cli::{init_logging, run, Cli, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(&cli);
    init_logging(&settings.log_level, settings.log_json)?;

    info!("=== stylo-features v{} ===", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    run(&cli.documents, &settings, &mut stdout.lock()).await
}
