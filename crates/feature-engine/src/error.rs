//! Feature Engine Error Types

use thiserror::Error;

/// Invalid engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Word-length range outside the tracked buckets or inverted
    #[error("Invalid word-length range [{min}, {max}]: must satisfy 1 <= min <= max <= {limit}")]
    InvalidLengthRange { min: usize, max: usize, limit: usize },
}
