//! Table providers.
//!
//! A [`TableProvider`] turns a source name into a [`FigureSet`]. The
//! bundled [`FileProvider`] reads files from disk and picks the decoder
//! from the file extension.

use crate::error::LoadError;
use crate::figure::FigureSet;
use crate::format::{parse_source, SourceFormat};
use async_trait::async_trait;
use interp_core::math::interpolators::Extrapolation;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Source of figure tables.
#[async_trait]
pub trait TableProvider: Send + Sync {
    /// Load every figure published by `source`.
    async fn load(&self, source: &str) -> Result<FigureSet, LoadError>;
}

/// Loads tables from local files.
#[derive(Debug, Clone, Default)]
pub struct FileProvider {
    base_dir: Option<PathBuf>,
    extrapolation: Extrapolation,
}

impl FileProvider {
    /// Provider resolving paths against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative sources against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Extrapolation policy for loaded figures.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Path a source name refers to.
    pub fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl TableProvider for FileProvider {
    async fn load(&self, source: &str) -> Result<FigureSet, LoadError> {
        let path = self.resolve(source);
        let origin = path.display().to_string();
        let format = SourceFormat::from_path(&path)?;

        debug!(path = %origin, %format, "reading table source");
        let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
            error!(path = %origin, error = %e, "table source not loaded");
            LoadError::Io {
                path: origin.clone(),
                source: e,
            }
        })?;

        let vars = parse_source(&text, format, &origin)?;
        let set = FigureSet::from_variables(vars, self.extrapolation)?;

        info!(path = %origin, figures = set.len(), "loaded figure tables");
        Ok(set)
    }
}
