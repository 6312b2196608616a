//! Domain models for the VPC summary report.
//!
//! This module contains the records assembled from the EC2 responses:
//! - [`NetworkRecord`] - a VPC with its child resources
//! - [`SubnetRecord`] - a subnet inside one VPC
//! - [`SecurityGroupRecord`] - a security group inside one VPC
//! - [`Tags`] - ordered `key=value` labels
//! - [`Fetched`] - a fetch result that remembers whether it was defaulted

mod fetched;
mod network;
mod security_group;
mod subnet;
mod tags;

// Re-export public types
pub use fetched::Fetched;
pub use network::NetworkRecord;
pub use security_group::SecurityGroupRecord;
pub use subnet::SubnetRecord;
pub use tags::Tags;

use crate::aws::FetchError;

/// Read a field the report depends on, failing when the provider omitted it.
pub(crate) fn required(
    value: Option<&str>,
    resource: &'static str,
    field: &'static str,
) -> Result<String, FetchError> {
    value
        .map(str::to_string)
        .ok_or(FetchError::MissingField { resource, field })
}
