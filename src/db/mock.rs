//! Mock database clients for testing.
//!
//! Canned-result and always-failing implementations so the presentation
//! layer can be exercised without a real database file.

use super::{DatabaseClient, QueryResult};
use crate::error::{PitwallError, Result};
use async_trait::async_trait;

/// A mock client that returns a fixed result for every query.
#[derive(Debug, Default)]
pub struct MockDatabaseClient {
    result: QueryResult,
}

impl MockDatabaseClient {
    /// Creates a mock that returns an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that returns the given result.
    pub fn with_result(result: QueryResult) -> Self {
        Self { result }
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        Ok(self.result.clone())
    }
}

/// A mock client that fails every query with a fixed message.
#[derive(Debug)]
pub struct FailingDatabaseClient {
    message: String,
}

impl FailingDatabaseClient {
    /// Creates a failing mock with the given error detail.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        Err(PitwallError::query(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ColumnInfo, Value};

    #[tokio::test]
    async fn test_mock_returns_canned_result() {
        let result = QueryResult::with_data(
            vec![ColumnInfo::new("constructor_name", "TEXT")],
            vec![vec![Value::from("Red Bull")]],
        );
        let client = MockDatabaseClient::with_result(result);

        let fetched = client.execute_query("SELECT 1").await.unwrap();
        assert_eq!(fetched.row_count, 1);
        assert_eq!(fetched.rows[0][0], Value::from("Red Bull"));
    }

    #[tokio::test]
    async fn test_failing_client_fails() {
        let client = FailingDatabaseClient::new("no such table: results");
        let err = client.execute_query("SELECT 1").await.unwrap_err();
        assert!(err.to_string().contains("no such table: results"));
    }
}
