//! Command-line arguments

use crate::output::OutputFormat;
use clap::Parser;
use feature_engine::Encoding;
use std::path::PathBuf;

/// Compute stylometric feature vectors for text documents
#[derive(Debug, Clone, Parser)]
#[command(name = "stylo-features", version, about)]
pub struct Cli {
    /// Documents to analyse, one output line each
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,

    /// Character-class definitions (`name<TAB>members`); omit for the raw character profile
    #[arg(short, long)]
    pub classes: Option<PathBuf>,

    /// Settings file (TOML, JSON or YAML); defaults to ./stylo.toml when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print a line of feature names before the values (CSV only)
    #[arg(long)]
    pub header: bool,

    /// Document encoding
    #[arg(short, long)]
    pub encoding: Option<Encoding>,

    /// Count only purely alphabetic tokens
    #[arg(long)]
    pub alphabetic_only: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "stylo-features",
            "--classes",
            "classes.tsv",
            "--format",
            "json",
            "-e",
            "latin1",
            "a.txt",
            "b.txt",
        ])
        .unwrap();
        assert_eq!(cli.documents.len(), 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.encoding, Some(Encoding::Latin1));
        assert!(!cli.header);
    }

    #[test]
    fn test_documents_required() {
        assert!(Cli::try_parse_from(["stylo-features"]).is_err());
    }
}
