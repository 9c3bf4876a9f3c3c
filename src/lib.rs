//! Pitwall - a terminal dashboard for Formula 1 race analytics.
//!
//! This library exposes the core modules for use in integration tests.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod headless;
pub mod logging;
pub mod query;
pub mod tui;
