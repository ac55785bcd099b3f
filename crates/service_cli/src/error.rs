//! CLI error types

use crate::config::ConfigError;
use adapter_tables::LoadError;
use interp_core::types::InterpolationError;
use thiserror::Error;

/// Errors surfaced to the command line
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Table error: {0}")]
    Load(#[from] LoadError),

    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::FileNotFound("data/missing.js".to_string());
        assert_eq!(err.to_string(), "File not found: data/missing.js");

        let err: CliError = InterpolationError::DegenerateInterval {
            lower: 1.0,
            upper: 1.0,
        }
        .into();
        assert!(err.to_string().starts_with("Interpolation error: Degenerate axis interval"));
    }

    #[test]
    fn test_load_error_conversion() {
        let err: CliError = LoadError::InvalidName("X".to_string()).into();
        assert!(matches!(err, CliError::Load(_)));
    }
}
