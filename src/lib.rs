//! AWS VPC Summary
//!
//! Lists the VPCs visible to the ambient AWS credentials, fetches each VPC's
//! subnets and security groups, and prints them as console tables.
//!
//! # Modules
//! - [`aws`] - EC2 list queries and their errors
//! - [`config`] - Settings from the environment
//! - [`logging`] - log4rs setup
//! - [`models`] - Records assembled from the EC2 responses
//! - [`output`] - Console rendering
//! - [`processing`] - Listing and aggregation

pub mod aws;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use aws::NetworkApi;
use processing::{list_networks, ReportSummary};
use std::io::{self, Write};

/// Fetch everything and write the report to `out`.
///
/// Fetch failures are logged and shown as empty sections; only a write
/// failure is returned as an error.
pub async fn run_report<W: Write>(
    api: &impl NetworkApi,
    out: &mut W,
) -> io::Result<ReportSummary> {
    let networks = list_networks(api).await;
    output::render_report(out, networks.items())?;

    let summary = ReportSummary::from_networks(&networks);
    if summary.defaulted_fetches > 0 {
        log::warn!("Report done: {summary}");
    } else {
        log::info!("Report done: {summary}");
    }
    Ok(summary)
}
