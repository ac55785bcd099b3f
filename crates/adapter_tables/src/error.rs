//! Error types for table loading.

use crate::naming::{Argument, FigureId};
use interp_core::types::InterpolationError;
use thiserror::Error;

/// Errors raised while loading, assembling or querying figure tables.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source could not be read.
    #[error("{path} not loaded: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File extension does not name a supported format.
    #[error("Unsupported source format: {0}. Supported: js, json, toml")]
    UnsupportedFormat(String),

    /// Source text is not valid for its format.
    #[error("Parse error in {origin}: {message}")]
    Parse {
        /// Source name
        origin: String,
        /// What went wrong
        message: String,
    },

    /// Variable or figure name does not follow the naming convention.
    #[error("Invalid figure name: {0}")]
    InvalidName(String),

    /// The same figure id is published as both a surface and a curve.
    #[error("Figure {0} is published with conflicting kinds")]
    ConflictingKinds(FigureId),

    /// A figure lacks one of its axis or data variables.
    #[error("Figure {figure} is missing component {component}")]
    MissingComponent {
        /// Figure being assembled
        figure: FigureId,
        /// Absent argument
        component: Argument,
    },

    /// A component has the wrong nesting (vector where a grid is needed, or vice versa).
    #[error("Figure {figure} component {component} must be a {expected}, found {found}")]
    WrongShape {
        /// Figure being assembled
        figure: FigureId,
        /// Offending argument
        component: Argument,
        /// Expected shape, "vector" or "grid"
        expected: &'static str,
        /// Shape actually bound
        found: &'static str,
    },

    /// Figure data failed interpolator validation.
    #[error("Invalid table for figure {figure}: {source}")]
    InvalidTable {
        /// Figure being assembled
        figure: FigureId,
        /// Validation failure
        #[source]
        source: InterpolationError,
    },

    /// No figure with this id was loaded.
    #[error("Unknown figure: {0}")]
    UnknownFigure(FigureId),

    /// Query dimensionality does not match the figure.
    #[error("Figure {figure} expects a {expected} query")]
    QueryMismatch {
        /// Figure queried
        figure: FigureId,
        /// Expected query, "1D" or "2D"
        expected: &'static str,
    },

    /// User-supplied query value is not a finite number.
    #[error("Invalid query value '{input}': {reason}")]
    InvalidQuery {
        /// Trimmed input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Interpolation failed for a valid query.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
