//! Check command implementation
//!
//! Loads a table source, validating every figure, and reports what it found.

use adapter_tables::naming::FigureKind;
use adapter_tables::FigureSet;
use serde_json::json;
use tracing::{info, warn};

use super::load_tables;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Figure counts by kind
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    surfaces: usize,
    curves: usize,
}

impl Summary {
    fn of(set: &FigureSet) -> Self {
        let mut summary = Self::default();
        for (_, figure) in set.iter() {
            match figure.kind() {
                FigureKind::Surface => summary.surfaces += 1,
                FigureKind::Curve => summary.curves += 1,
            }
        }
        summary
    }
}

/// Run the check command
pub async fn run(config: &CliConfig) -> Result<()> {
    info!("Checking table source...");
    let set = load_tables(config).await?;
    let summary = Summary::of(&set);

    if set.is_empty() {
        warn!("Table source contains no figures");
    }

    let source = config
        .data_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    println!("{}", render(&source, &summary, config.format));
    Ok(())
}

fn render(source: &str, summary: &Summary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json!({
            "source": source,
            "status": "ok",
            "surfaces": summary.surfaces,
            "curves": summary.curves,
        })
        .to_string(),
        OutputFormat::Table => format!(
            "{}: ok ({} surfaces, {} curves)",
            source, summary.surfaces, summary.curves
        ),
    }
}
