//! SQLite gateway implementation.
//!
//! Opens a read-only connection to the backing file for the duration of a
//! single `execute_query` call and closes it on every exit path, so repeated
//! failed attempts cannot leak connections. No pooling; the interaction
//! model is one blocking query per user action.

use crate::db::{ColumnInfo, DatabaseClient, QueryResult, Row, Value};
use crate::error::{PitwallError, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Column as SqlxColumn, Connection, Executor, Row as SqlxRow, TypeInfo};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Gateway to a local SQLite results database.
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    path: PathBuf,
}

impl SqliteGateway {
    /// Creates a gateway for the given database file.
    ///
    /// The file is not touched until the first query executes.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a read-only connection to the backing file.
    async fn open(&self) -> Result<SqliteConnection> {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(true);

        SqliteConnection::connect_with(&options).await.map_err(|e| {
            PitwallError::connection(format!(
                "Cannot open database '{}': {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl DatabaseClient for SqliteGateway {
    async fn execute_query(&self, sql: &str) -> Result<QueryResult> {
        let start = Instant::now();
        let mut conn = self.open().await?;

        let fetched = sqlx::query(sql).fetch_all(&mut conn).await;

        // Column metadata comes from the first row when there is one. For an
        // empty result set, fall back to describing the prepared statement
        // (best effort; an empty column list renders as "(empty result)").
        let described = match &fetched {
            Ok(rows) if rows.is_empty() => (&mut conn).describe(sql).await.ok(),
            _ => None,
        };

        // The connection must be released before any error propagates.
        if let Err(e) = conn.close().await {
            warn!("Error closing database connection: {e}");
        }

        let raw_rows = fetched.map_err(|e| PitwallError::query(format_query_error(e)))?;
        let execution_time = start.elapsed();

        let columns: Vec<ColumnInfo> = if let Some(first_row) = raw_rows.first() {
            first_row
                .columns()
                .iter()
                .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
                .collect()
        } else {
            described
                .map(|d| {
                    d.columns()
                        .iter()
                        .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
                        .collect()
                })
                .unwrap_or_default()
        };

        let rows: Vec<Row> = raw_rows.iter().map(convert_row).collect();
        let row_count = rows.len();

        debug!(
            rows = row_count,
            elapsed_ms = execution_time.as_millis() as u64,
            "query executed"
        );

        Ok(QueryResult {
            columns,
            rows,
            execution_time,
            row_count,
        })
    }
}

/// Converts a sqlx SqliteRow to our Row type.
fn convert_row(row: &SqliteRow) -> Row {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, col)| convert_value(row, i, col.type_info().name()))
        .collect()
}

/// Converts a single column value from a SqliteRow to our Value type.
///
/// SQLite columns are dynamically typed, so the declared type is a hint, not
/// a guarantee; decoding falls back to text when the typed decode fails.
fn convert_value(row: &SqliteRow, index: usize, type_name: &str) -> Value {
    match type_name.to_uppercase().as_str() {
        "BOOLEAN" => row
            .try_get::<Option<bool>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bool)
            .unwrap_or(Value::Null),

        "INTEGER" | "INT" | "BIGINT" => row
            .try_get::<Option<i64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Int)
            .unwrap_or(Value::Null),

        "REAL" | "NUMERIC" => row
            .try_get::<Option<f64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Float)
            .unwrap_or(Value::Null),

        "BLOB" => row
            .try_get::<Option<Vec<u8>>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bytes)
            .unwrap_or(Value::Null),

        // TEXT, DATE, DATETIME, and anything else decode as text
        _ => row
            .try_get::<Option<String>, _>(index)
            .ok()
            .flatten()
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}

/// Formats a sqlx error into the user-visible failure detail.
///
/// SQLite messages already name the offending object ("no such table:
/// lap_times"), so the message is passed through without decoration.
fn format_query_error(error: sqlx::Error) -> String {
    match error.as_database_error() {
        Some(db_error) => db_error.message().to_string(),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_connection_error() {
        let gateway = SqliteGateway::new("/nonexistent/pitwall/missing.db");
        let err = gateway.execute_query("SELECT 1").await.unwrap_err();
        assert!(matches!(err, PitwallError::Connection(_)));
        assert!(err.to_string().contains("missing.db"));
    }

    #[test]
    fn test_gateway_remembers_path() {
        let gateway = SqliteGateway::new("races.db");
        assert_eq!(gateway.path(), Path::new("races.db"));
    }
}
