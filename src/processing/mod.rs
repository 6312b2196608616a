//! VPC data gathering.
//!
//! This module contains the fetch and aggregation steps:
//! - [`fetch`] - Network lister and child resource fetchers
//! - [`summary`] - Counts for the end-of-run log line

mod fetch;
mod summary;

// Re-export public functions
pub use crate::models::Fetched;
pub use fetch::{fetch_security_groups, fetch_subnets, list_networks};
pub use summary::ReportSummary;
