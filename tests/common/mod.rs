//! Shared fixture helpers for integration tests.
//!
//! Each test builds its own temporary SQLite database with the Formula 1
//! schema the catalog queries expect, seeded with test-specific rows.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::path::Path;

/// The subset of the Formula 1 results schema referenced by the catalog.
///
/// `results.position` is INTEGER-declared but can hold text sentinels like
/// 'DNF', matching the source data where non-finishers have no numeric
/// position.
pub const SCHEMA: &str = r#"
CREATE TABLE constructors (
    constructorId INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE drivers (
    driverId INTEGER PRIMARY KEY,
    forename TEXT NOT NULL,
    surname TEXT NOT NULL
);

CREATE TABLE races (
    raceId INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    date TEXT NOT NULL,
    year INTEGER NOT NULL
);

CREATE TABLE results (
    resultId INTEGER PRIMARY KEY AUTOINCREMENT,
    raceId INTEGER NOT NULL,
    driverId INTEGER NOT NULL,
    constructorId INTEGER NOT NULL,
    points REAL NOT NULL,
    position INTEGER
);

CREATE TABLE driver_standings (
    driverStandingsId INTEGER PRIMARY KEY AUTOINCREMENT,
    raceId INTEGER NOT NULL,
    driverId INTEGER NOT NULL,
    points REAL NOT NULL
);

CREATE TABLE lap_times (
    raceId INTEGER NOT NULL,
    driverId INTEGER NOT NULL,
    lap INTEGER NOT NULL,
    milliseconds INTEGER NOT NULL
);
"#;

/// Creates a fixture database at `path` with the full schema and the given
/// seed statements.
pub async fn create_fixture(path: &Path, seed: &[&str]) {
    create_fixture_with_schema(path, SCHEMA, seed).await;
}

/// Creates a fixture database with a custom schema, for tests that need
/// tables to be missing.
pub async fn create_fixture_with_schema(path: &Path, schema: &str, seed: &[&str]) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let mut conn = SqliteConnection::connect_with(&options)
        .await
        .expect("open fixture database");

    sqlx::raw_sql(schema)
        .execute(&mut conn)
        .await
        .expect("create fixture schema");

    for stmt in seed {
        sqlx::raw_sql(stmt)
            .execute(&mut conn)
            .await
            .expect("seed fixture data");
    }

    conn.close().await.expect("close fixture connection");
}

/// Seed rows for the 2023 winning-driver scenario: driver 1 has 3 wins,
/// driver 2 has 1.
pub const WINS_2023_SEED: &[&str] = &[
    "INSERT INTO drivers VALUES (1, 'Max', 'Verstappen'), (2, 'Sergio', 'Perez')",
    "INSERT INTO constructors VALUES (1, 'Red Bull')",
    "INSERT INTO races VALUES
        (1, 'Bahrain Grand Prix', '2023-03-05', 2023),
        (2, 'Saudi Arabian Grand Prix', '2023-03-19', 2023),
        (3, 'Australian Grand Prix', '2023-04-02', 2023),
        (4, 'Azerbaijan Grand Prix', '2023-04-30', 2023)",
    "INSERT INTO results (raceId, driverId, constructorId, points, position) VALUES
        (1, 1, 1, 25.0, 1),
        (2, 1, 1, 25.0, 1),
        (3, 1, 1, 25.0, 1),
        (4, 2, 1, 25.0, 1),
        (1, 2, 1, 18.0, 2),
        (2, 2, 1, 18.0, 2),
        (3, 2, 1, 18.0, 2),
        (4, 1, 1, 18.0, 2)",
];
