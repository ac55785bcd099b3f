//! Lookup command implementation
//!
//! Evaluates one figure at a query point.

use adapter_tables::figure::Query;
use adapter_tables::naming::FigureId;
use adapter_tables::sanitize::parse_query_value;
use serde_json::json;
use tracing::info;

use super::load_tables;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the lookup command
pub async fn run(config: &CliConfig, figure: &str, x: &str, y: Option<&str>) -> Result<()> {
    let (id, query) = parse_request(figure, x, y)?;
    let set = load_tables(config).await?;

    info!("Evaluating {} at {} ({})", id, query, config.extrapolation);
    let value = set.evaluate(&id, query)?;

    println!("{}", render(id, query, value, config.format));
    Ok(())
}

fn parse_request(figure: &str, x: &str, y: Option<&str>) -> Result<(FigureId, Query)> {
    let id: FigureId = figure.parse()?;
    let x = parse_query_value(x)?;
    let query = match y {
        Some(y) => Query::Point2(x, parse_query_value(y)?),
        None => Query::Point1(x),
    };
    Ok((id, query))
}

fn render(id: FigureId, query: Query, value: f64, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let point = match query {
                Query::Point1(x) => json!([x]),
                Query::Point2(x, y) => json!([x, y]),
            };
            json!({ "figure": id.to_string(), "point": point, "value": value }).to_string()
        }
        OutputFormat::Table => format!("{} {} = {}", id, query, value),
    }
}
