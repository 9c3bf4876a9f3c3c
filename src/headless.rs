//! Headless single-shot execution.
//!
//! Runs one catalog query without a terminal and formats the outcome as
//! plain text or JSON, for scripting and for integration tests that need
//! the presentation output without a TTY.

use crate::catalog::QueryCatalog;
use crate::db::{DatabaseClient, QueryResult};
use crate::error::{PitwallError, Result};
use crate::query::{QueryOutcome, QueryRunner};
use crate::tui::widgets::results::EMPTY_NOTICE;
use crate::tui::widgets::table::ResultTable;

/// Output format for headless mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text table or notice.
    #[default]
    Text,
    /// JSON object with columns and rows.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// Runs `name` from the catalog and renders the outcome.
///
/// Table and empty outcomes format to a string; failures propagate as errors
/// so the process can exit nonzero.
pub async fn run_query(
    db: &dyn DatabaseClient,
    catalog: &QueryCatalog,
    name: &str,
    format: OutputFormat,
) -> Result<String> {
    let runner = QueryRunner::new(db, catalog);

    match runner.run(name).await {
        QueryOutcome::Table(result) => Ok(match format {
            OutputFormat::Text => format!(
                "Results for: {name}\n{}",
                ResultTable::new(&result).to_plain_text()
            ),
            OutputFormat::Json => to_json(name, &result),
        }),
        QueryOutcome::Empty => Ok(match format {
            OutputFormat::Text => EMPTY_NOTICE.to_string(),
            OutputFormat::Json => to_json(name, &QueryResult::new()),
        }),
        QueryOutcome::Failure(detail) => Err(PitwallError::query(detail)),
    }
}

/// Serializes a result as a JSON object.
fn to_json(name: &str, result: &QueryResult) -> String {
    let json = serde_json::json!({
        "query": name,
        "columns": result.column_names(),
        "rows": result.rows,
        "row_count": result.row_count,
    });
    // Serialization of plain vectors and scalars cannot fail
    serde_json::to_string_pretty(&json).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ColumnInfo, FailingDatabaseClient, MockDatabaseClient, Value};

    fn constructor_result() -> QueryResult {
        QueryResult::with_data(
            vec![
                ColumnInfo::new("constructor_name", "TEXT"),
                ColumnInfo::new("average_points", "REAL"),
            ],
            vec![
                vec![Value::from("Red Bull"), Value::Float(15.0)],
                vec![Value::from("Ferrari"), Value::Float(5.0)],
            ],
        )
    }

    #[tokio::test]
    async fn test_text_output_labels_query() {
        let db = MockDatabaseClient::with_result(constructor_result());
        let catalog = QueryCatalog::builtin();

        let out = run_query(
            &db,
            &catalog,
            "Average Points by Constructor",
            OutputFormat::Text,
        )
        .await
        .unwrap();

        assert!(out.starts_with("Results for: Average Points by Constructor"));
        assert!(out.contains("Red Bull"));
    }

    #[tokio::test]
    async fn test_json_output_shape() {
        let db = MockDatabaseClient::with_result(constructor_result());
        let catalog = QueryCatalog::builtin();

        let out = run_query(
            &db,
            &catalog,
            "Average Points by Constructor",
            OutputFormat::Json,
        )
        .await
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["query"], "Average Points by Constructor");
        assert_eq!(parsed["row_count"], 2);
        assert_eq!(parsed["columns"][0], "constructor_name");
        assert_eq!(parsed["rows"][0][0], "Red Bull");
        assert_eq!(parsed["rows"][0][1], 15.0);
    }

    #[tokio::test]
    async fn test_empty_result_is_neutral_notice() {
        let db = MockDatabaseClient::new();
        let catalog = QueryCatalog::builtin();

        let out = run_query(
            &db,
            &catalog,
            "Average Lap Time for Race 5",
            OutputFormat::Text,
        )
        .await
        .unwrap();

        assert_eq!(out, EMPTY_NOTICE);
    }

    #[tokio::test]
    async fn test_failure_propagates_as_error() {
        let db = FailingDatabaseClient::new("no such table: results");
        let catalog = QueryCatalog::builtin();

        let err = run_query(&db, &catalog, "Top 5 Race Finishes", OutputFormat::Text)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no such table: results"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
