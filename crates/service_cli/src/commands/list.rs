//! List command implementation
//!
//! Prints every figure in a table source with its kind and axis ranges.

use adapter_tables::FigureSet;
use serde_json::json;
use tracing::info;

use super::load_tables;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the list command
pub async fn run(config: &CliConfig) -> Result<()> {
    let set = load_tables(config).await?;
    info!("Listing {} figures", set.len());
    println!("{}", render(&set, config.format));
    Ok(())
}

fn render(set: &FigureSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let figures: Vec<_> = set
                .iter()
                .map(|(id, figure)| {
                    json!({
                        "figure": id.to_string(),
                        "kind": figure.kind().to_string(),
                        "domain": figure.describe_domain(),
                    })
                })
                .collect();
            serde_json::Value::Array(figures).to_string()
        }
        OutputFormat::Table => {
            let mut out = format!("{:<10} {:<8} {}", "Figure", "Kind", "Domain");
            for (id, figure) in set.iter() {
                out.push_str(&format!(
                    "\n{:<10} {:<8} {}",
                    id.to_string(),
                    figure.kind().to_string(),
                    figure.describe_domain()
                ));
            }
            if set.is_empty() {
                out.push_str("\n(no figures)");
            }
            out
        }
    }
}
