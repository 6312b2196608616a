//! End-of-run counts.

use crate::models::{Fetched, NetworkRecord};
use std::fmt;

/// Totals for one report run, including how many fetches were defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub networks: usize,
    pub subnets: usize,
    pub security_groups: usize,
    /// Fetches that failed and were replaced by an empty list.
    pub defaulted_fetches: usize,
}

impl ReportSummary {
    pub fn from_networks(networks: &Fetched<NetworkRecord>) -> ReportSummary {
        let mut summary = ReportSummary {
            defaulted_fetches: usize::from(networks.is_defaulted()),
            ..Default::default()
        };
        for network in networks.items() {
            summary.networks += 1;
            summary.subnets += network.subnets.items().len();
            summary.security_groups += network.security_groups.items().len();
            summary.defaulted_fetches += usize::from(network.subnets.is_defaulted())
                + usize::from(network.security_groups.is_defaulted());
        }
        summary
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} VPCs, {} subnets, {} security groups ({} failed fetches)",
            self.networks, self.subnets, self.security_groups, self.defaulted_fetches
        )
    }
}
