//! Feature rendering

use clap::ValueEnum;
use feature_engine::{FeatureValue, FeatureVector};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One comma-joined line of values per document
    #[default]
    Csv,
    /// One JSON object per document
    Json,
}

/// Render a single value
///
/// Ratios use three decimals. Counts are written as integers, except zero
/// which is written as `0.000` like any other zero.
pub fn format_value(value: FeatureValue) -> String {
    match value {
        FeatureValue::Count(0) => "0.000".to_string(),
        FeatureValue::Count(n) => n.to_string(),
        FeatureValue::Ratio(x) if x == 0.0 => "0.000".to_string(),
        FeatureValue::Ratio(x) => format!("{x:.3}"),
    }
}

/// Comma-joined values
pub fn csv_line(features: &FeatureVector) -> String {
    features
        .iter()
        .map(|(_, v)| format_value(v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Comma-joined feature names, quoted where needed
pub fn csv_header(features: &FeatureVector) -> String {
    features
        .names()
        .map(quote_field)
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Serialize)]
struct DocumentFeatures<'a> {
    document: String,
    features: &'a FeatureVector,
}

/// JSON object naming the document and its features, keys in feature order
pub fn json_line(document: &Path, features: &FeatureVector) -> serde_json::Result<String> {
    serde_json::to_string(&DocumentFeatures {
        document: document.display().to_string(),
        features,
    })
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
