//! Catalog query execution.
//!
//! Bridges the catalog and the database gateway, classifying every attempt
//! into the three outcomes the rendering layer matches exhaustively. Shared
//! by the TUI loop and headless mode.

use crate::catalog::QueryCatalog;
use crate::db::{DatabaseClient, QueryResult};
use crate::error::PitwallError;
use tracing::{info, warn};

/// Outcome of running a catalog query, as presented to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The query returned at least one row.
    Table(QueryResult),
    /// The query ran successfully but returned no rows.
    Empty,
    /// Lookup or execution failed; carries the human-readable detail.
    Failure(String),
}

impl QueryOutcome {
    /// Returns true for the failure branch.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Runs catalog queries against a database client.
pub struct QueryRunner<'a> {
    db: &'a dyn DatabaseClient,
    catalog: &'a QueryCatalog,
}

impl<'a> QueryRunner<'a> {
    /// Creates a new runner over the given client and catalog.
    pub fn new(db: &'a dyn DatabaseClient, catalog: &'a QueryCatalog) -> Self {
        Self { db, catalog }
    }

    /// Looks up `name` in the catalog and executes its SQL.
    ///
    /// Total over all inputs: unknown names and execution failures both fold
    /// into [`QueryOutcome::Failure`], so the interaction loop never
    /// terminates on a bad attempt.
    pub async fn run(&self, name: &str) -> QueryOutcome {
        let sql = match self.catalog.get_sql(name) {
            Ok(sql) => sql,
            Err(e) => {
                warn!(query = name, "catalog lookup failed");
                return QueryOutcome::Failure(e.to_string());
            }
        };

        match self.db.execute_query(sql).await {
            Ok(result) if result.is_empty() => {
                info!(query = name, "query returned no rows");
                QueryOutcome::Empty
            }
            Ok(result) => {
                info!(query = name, rows = result.row_count, "query succeeded");
                QueryOutcome::Table(result)
            }
            Err(e) => {
                warn!(query = name, error = %e, "query failed");
                QueryOutcome::Failure(failure_detail(e))
            }
        }
    }
}

/// Extracts the detail string shown to the user, dropping the category
/// prefix for execution errors since the notice already labels itself.
fn failure_detail(error: PitwallError) -> String {
    match error {
        PitwallError::Query(detail) | PitwallError::Connection(detail) => detail,
        other => other.to_string(),
    }
}
