//! Output formatting for VPC data.
//!
//! This module handles rendering the report to the console:
//! - [`report`] - Per-VPC sections
//! - [`table`] - Bordered ASCII tables
//! - [`terminal`] - Cell padding helpers

mod report;
mod table;
mod terminal;

pub use report::render_report;
pub use table::AsciiTable;
