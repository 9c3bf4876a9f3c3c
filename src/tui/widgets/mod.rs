//! TUI widgets for Pitwall.

pub mod header;
pub mod results;
pub mod selector;
pub mod table;
