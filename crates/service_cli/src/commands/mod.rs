//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod list;
pub mod lookup;

use adapter_tables::provider::{FileProvider, TableProvider};
use adapter_tables::FigureSet;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Table source named by `--data` or the configuration
fn data_path(config: &CliConfig) -> Result<&PathBuf> {
    config.data_path.as_ref().ok_or_else(|| {
        CliError::InvalidArgument(
            "No table source: pass --data or set data_path / FIGINTERP_DATA".to_string(),
        )
    })
}

/// Load the configured table source
pub async fn load_tables(config: &CliConfig) -> Result<FigureSet> {
    let path = data_path(config)?;
    load_with(&FileProvider::new().with_extrapolation(config.extrapolation), path).await
}

async fn load_with(provider: &dyn TableProvider, path: &Path) -> Result<FigureSet> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    info!("Loading tables from {}", path.display());
    let source = path.to_string_lossy();
    Ok(provider.load(&source).await?)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_fixture() {
        let (_dir, config) = fixture::config();
        let set = load_tables(&config).await.unwrap();
        assert_eq!(set.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_data_path() {
        let config = CliConfig::default();
        assert!(matches!(
            load_tables(&config).await,
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_nonexistent_file() {
        let config = CliConfig {
            data_path: Some(PathBuf::from("/nonexistent/figures.js")),
            ..Default::default()
        };
        assert!(matches!(
            load_tables(&config).await,
            Err(CliError::FileNotFound(_))
        ));
    }
}
