//! The built-in query catalog.
//!
//! An immutable, ordered mapping from display name to SQL text, constructed
//! once at startup. Adding a query means adding an entry here; the catalog
//! is never mutated at runtime. The SQL is trusted and parameterless; its
//! correctness is the responsibility of whoever authors the entry.

use crate::error::{PitwallError, Result};

/// A single named analytics query.
#[derive(Debug, Clone, Copy)]
pub struct QueryEntry {
    /// Display name, unique within the catalog, used as the selection key.
    pub name: &'static str,
    /// Static, parameterless SQL text.
    pub sql: &'static str,
}

/// The five built-in analytics queries, in display order.
const BUILTIN_QUERIES: &[QueryEntry] = &[
    QueryEntry {
        name: "Average Points by Constructor",
        sql: r#"
SELECT c.name AS constructor_name,
       AVG(r.points) AS average_points
FROM results r
JOIN constructors c ON r.constructorId = c.constructorId
GROUP BY c.name
ORDER BY average_points DESC;
"#,
    },
    QueryEntry {
        name: "Drivers with Above Average Points",
        sql: r#"
SELECT d.forename, d.surname, ds.points
FROM drivers d
JOIN driver_standings ds ON d.driverId = ds.driverId
WHERE ds.points > (
    SELECT AVG(points)
    FROM driver_standings
);
"#,
    },
    QueryEntry {
        name: "Top 5 Race Finishes",
        sql: r#"
SELECT r.name AS race_name,
       r.date AS race_date,
       d.forename || ' ' || d.surname AS driver_name,
       c.name AS constructor_name,
       rs.position AS finishing_position
FROM results rs
INNER JOIN drivers d ON rs.driverId = d.driverId
INNER JOIN constructors c ON rs.constructorId = c.constructorId
INNER JOIN races r ON rs.raceId = r.raceId
WHERE CAST(rs.position AS INT) <= 5
ORDER BY r.date, rs.position;
"#,
    },
    QueryEntry {
        name: "2023 Top Winning Driver",
        sql: r#"
SELECT d.forename || ' ' || d.surname AS driver_name,
       COUNT(rs.position) AS total_wins
FROM results rs
JOIN drivers d ON rs.driverId = d.driverId
JOIN races r ON rs.raceId = r.raceId
WHERE rs.position = 1 AND r.year = 2023
GROUP BY d.driverId, d.forename, d.surname
ORDER BY total_wins DESC
LIMIT 1;
"#,
    },
    QueryEntry {
        name: "Average Lap Time for Race 5",
        sql: r#"
SELECT d.forename || ' ' || d.surname AS driver_name,
       AVG(lt.milliseconds) AS avg_lap_time
FROM lap_times lt
JOIN drivers d ON lt.driverId = d.driverId
JOIN races r ON lt.raceId = r.raceId
WHERE r.raceId = 5
GROUP BY d.driverId, d.forename, d.surname
ORDER BY avg_lap_time ASC;
"#,
    },
];

/// Read-only lookup interface over the built-in queries.
#[derive(Debug, Clone)]
pub struct QueryCatalog {
    entries: &'static [QueryEntry],
}

impl QueryCatalog {
    /// Creates the catalog of built-in queries.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_QUERIES,
        }
    }

    /// Returns the display names in declared order.
    pub fn list_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// Looks up the SQL text for a display name.
    ///
    /// Fails with [`PitwallError::UnknownQuery`] if the name is not a catalog
    /// key. Unreachable from a selector populated by `list_names`, but the
    /// contract stays total for headless callers.
    pub fn get_sql(&self, name: &str) -> Result<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.sql)
            .ok_or_else(|| PitwallError::unknown_query(name))
    }

    /// Returns the number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_entries_in_declared_order() {
        let catalog = QueryCatalog::builtin();
        assert_eq!(
            catalog.list_names(),
            vec![
                "Average Points by Constructor",
                "Drivers with Above Average Points",
                "Top 5 Race Finishes",
                "2023 Top Winning Driver",
                "Average Lap Time for Race 5",
            ]
        );
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_every_entry_has_sql() {
        let catalog = QueryCatalog::builtin();
        for name in catalog.list_names() {
            let sql = catalog.get_sql(name).unwrap();
            assert!(!sql.trim().is_empty(), "empty SQL for {name}");
            assert!(
                sql.trim_start().to_uppercase().starts_with("SELECT"),
                "non-SELECT SQL for {name}"
            );
        }
    }

    #[test]
    fn test_unknown_name_fails() {
        let catalog = QueryCatalog::builtin();
        let err = catalog.get_sql("Fastest Pit Stops").unwrap_err();
        assert!(matches!(err, PitwallError::UnknownQuery(_)));
        assert!(err.to_string().contains("Fastest Pit Stops"));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let catalog = QueryCatalog::builtin();
        assert!(catalog.get_sql("average points by constructor").is_err());
        assert!(catalog.get_sql("Average Points by Constructor").is_ok());
    }
}
