//! Database gateway for Pitwall.
//!
//! A trait-based seam over the backing store so the presentation layer and
//! tests can run against mock implementations. The production gateway is
//! [`SqliteGateway`], which opens a scoped read-only connection per call.

mod mock;
mod sqlite;
mod types;

pub use mock::{FailingDatabaseClient, MockDatabaseClient};
pub use sqlite::SqliteGateway;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::error::Result;
use async_trait::async_trait;

/// Trait defining the interface to the backing store.
///
/// Implementations run the given SQL verbatim (queries are static and
/// trusted, no parameter binding) and materialize the full result set in
/// memory. Connection lifetime is an implementation detail; callers never
/// hold a connection.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a SQL query and returns the results.
    async fn execute_query(&self, sql: &str) -> Result<QueryResult>;
}
