//! Source formats for published tables.
//!
//! Every format decodes to the same thing: a map from variable name to a
//! [`RawValue`] (a vector or a grid of numbers).
//!
//! - `js`: script of `var NAME = [...];` statements ([`script`])
//! - `json`: object mapping names to arrays
//! - `toml`: table mapping names to arrays

pub mod script;

use crate::error::LoadError;
use crate::naming::VariableName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Variables decoded from one source, keyed by name.
pub type Variables = BTreeMap<String, RawValue>;

/// Array value bound to a variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// One-dimensional array (axis or series)
    Vector(Vec<f64>),
    /// Array of rows (grid)
    Grid(Vec<Vec<f64>>),
}

impl RawValue {
    /// Shape name used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            RawValue::Vector(_) => "vector",
            RawValue::Grid(_) => "grid",
        }
    }
}

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Assignment script
    Script,
    /// JSON object
    Json,
    /// TOML table
    Toml,
}

impl SourceFormat {
    /// Detect the format from a file extension (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use adapter_tables::format::SourceFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(SourceFormat::from_path(Path::new("F01.js")).unwrap(), SourceFormat::Script);
    /// assert_eq!(SourceFormat::from_path(Path::new("tables.TOML")).unwrap(), SourceFormat::Toml);
    /// assert!(SourceFormat::from_path(Path::new("tables.csv")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "js" => Ok(SourceFormat::Script),
            "json" => Ok(SourceFormat::Json),
            "toml" => Ok(SourceFormat::Toml),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Script => write!(f, "js"),
            SourceFormat::Json => write!(f, "json"),
            SourceFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Decode `text` in the given format.
///
/// `origin` names the source in error messages. Values that are not arrays
/// of numbers are skipped with a warning when their name is outside the
/// figure naming convention, and rejected otherwise.
///
/// # Example
///
/// ```
/// use adapter_tables::format::{parse_source, RawValue, SourceFormat};
///
/// let text = r#"{"title": "Figure 3.1", "F03_01_2IDi": [0, 1]}"#;
/// let vars = parse_source(text, SourceFormat::Json, "inline").unwrap();
/// assert_eq!(vars.len(), 1);
/// assert_eq!(vars["F03_01_2IDi"], RawValue::Vector(vec![0.0, 1.0]));
/// ```
pub fn parse_source(text: &str, format: SourceFormat, origin: &str) -> Result<Variables, LoadError> {
    let parse_error = |message: String| LoadError::Parse {
        origin: origin.to_string(),
        message,
    };

    let mut vars = Variables::new();
    match format {
        SourceFormat::Script => return script::parse_script(text, origin),
        SourceFormat::Json => {
            let entries: BTreeMap<String, serde_json::Value> =
                serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?;
            for (name, value) in entries {
                let decoded = serde_json::from_value(value).map_err(|e| e.to_string());
                bind(&mut vars, name, decoded, origin)?;
            }
        }
        SourceFormat::Toml => {
            let entries: BTreeMap<String, toml::Value> =
                toml::from_str(text).map_err(|e| parse_error(e.to_string()))?;
            for (name, value) in entries {
                let decoded = value.try_into().map_err(|e: toml::de::Error| e.to_string());
                bind(&mut vars, name, decoded, origin)?;
            }
        }
    }
    Ok(vars)
}

/// Record one decoded variable.
///
/// A value that failed to decode is only an error for names that follow
/// the figure naming convention; anything else is a helper and is skipped.
/// Rebinding a name keeps the last value.
pub(crate) fn bind(
    vars: &mut Variables,
    name: String,
    decoded: Result<RawValue, String>,
    origin: &str,
) -> Result<(), LoadError> {
    match decoded {
        Ok(value) => {
            if vars.insert(name.clone(), value).is_some() {
                warn!(origin, name = %name, "variable bound more than once, keeping last binding");
            }
            Ok(())
        }
        Err(message) if VariableName::parse(&name).is_ok() => Err(LoadError::Parse {
            origin: origin.to_string(),
            message: format!("{}: {}", name, message),
        }),
        Err(message) => {
            warn!(origin, name = %name, reason = %message, "skipping variable that is not a table");
            Ok(())
        }
    }
}
