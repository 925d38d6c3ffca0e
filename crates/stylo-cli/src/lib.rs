//! Stylometric Feature Driver
//!
//! Loads documents and an optional class table, runs the feature engines on
//! every document concurrently and renders one line per document.

mod args;
mod output;
mod settings;

pub use args::Cli;
pub use output::{csv_header, csv_line, format_value, json_line, OutputFormat};
pub use settings::Settings;

use anyhow::Context;
use feature_engine::{
    CharacterFeatures, ClassTable, FeatureExtractor, FeatureVector, LexicalRichness, TextSource,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging on stderr
pub fn init_logging(level: &str, json: bool) -> anyhow::Result<()> {
    let level: Level = level
        .parse()
        .with_context(|| format!("invalid log level '{level}'"))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// Build both engines from settings, loading the class table if one is configured
pub fn build_extractor(settings: &Settings) -> anyhow::Result<FeatureExtractor> {
    let lexical = LexicalRichness::new(settings.lexical.clone())
        .context("invalid lexical configuration")?;

    let classes = match &settings.classes {
        Some(path) => {
            let table = ClassTable::from_path(path)
                .with_context(|| format!("cannot load class table {}", path.display()))?;
            info!("Loaded {} character classes from {}", table.len(), path.display());
            Some(table)
        }
        None => None,
    };

    let character = CharacterFeatures::new(settings.character_config(), classes)
        .context("class table is missing a required class")?;

    Ok(FeatureExtractor::new(lexical, character))
}

/// Extract features for every document, each on its own blocking task
///
/// Results are returned in input order.
pub async fn extract_documents(
    extractor: Arc<FeatureExtractor>,
    documents: &[PathBuf],
) -> anyhow::Result<Vec<FeatureVector>> {
    let handles: Vec<_> = documents
        .iter()
        .cloned()
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            tokio::task::spawn_blocking(move || {
                let features = extractor
                    .extract(&TextSource::Path(path.clone()))
                    .with_context(|| format!("cannot extract features from {}", path.display()))?;
                debug!("{}: {} features", path.display(), features.len());
                Ok::<_, anyhow::Error>(features)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await??);
    }
    Ok(results)
}

/// Extract and render features for `documents` into `out`
pub async fn run<W: Write>(
    documents: &[PathBuf],
    settings: &Settings,
    out: &mut W,
) -> anyhow::Result<()> {
    let extractor = Arc::new(build_extractor(settings)?);

    info!("Extracting features from {} document(s)", documents.len());
    let results = extract_documents(extractor, documents).await?;

    for (idx, (path, features)) in documents.iter().zip(&results).enumerate() {
        match settings.format {
            OutputFormat::Csv => {
                if settings.header && idx == 0 {
                    writeln!(out, "{}", csv_header(features))?;
                } else if settings.header && !features.names().eq(results[0].names()) {
                    warn!(
                        "{} has different features than the header line",
                        path.display()
                    );
                }
                writeln!(out, "{}", csv_line(features))?;
            }
            OutputFormat::Json => writeln!(out, "{}", json_line(path, features)?)?,
        }
    }

    out.flush()?;
    Ok(())
}
