//! Layered settings
//!
//! Defaults, then a settings file, then `STYLO_*` environment variables,
//! then command-line flags.

use crate::args::Cli;
use crate::output::OutputFormat;
use config::{Config, ConfigError, Environment, File};
use feature_engine::{CharacterConfig, Encoding, LexicalConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "stylo";

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum log level
    pub log_level: String,

    /// Emit logs as JSON
    pub log_json: bool,

    /// Output format
    pub format: OutputFormat,

    /// Print a feature-name line first
    pub header: bool,

    /// Character-class definition file
    pub classes: Option<PathBuf>,

    /// Encoding every document is decoded with
    pub encoding: Encoding,

    /// Lexical engine configuration
    pub lexical: LexicalConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            format: OutputFormat::Csv,
            header: false,
            classes: None,
            encoding: Encoding::Utf8,
            lexical: LexicalConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit file, or `stylo.*` if present, plus the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };
        Self::from_sources(file, Environment::with_prefix("STYLO"))
    }

    fn from_sources(
        file: File<config::FileSourceFile, config::FileFormat>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(file)
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Character engine configuration derived from these settings
    pub fn character_config(&self) -> CharacterConfig {
        CharacterConfig {
            encoding: self.encoding,
        }
    }

    /// Apply command-line flags on top of the loaded settings
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.header {
            self.header = true;
        }
        if let Some(classes) = &cli.classes {
            self.classes = Some(classes.clone());
        }
        if let Some(encoding) = cli.encoding {
            self.encoding = encoding;
        }
        if cli.alphabetic_only {
            self.lexical.alphabetic_only = true;
        }
        self
    }
}
