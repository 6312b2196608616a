//! Network lister and child resource fetchers.
//!
//! Every fetch swallows its own error: it is logged, and the caller receives
//! [`Fetched::Defaulted`], which reads as an empty list. Nothing here retries.

use crate::aws::{FetchError, NetworkApi};
use crate::models::{Fetched, NetworkRecord, SecurityGroupRecord, SubnetRecord};

/// List all VPCs and fetch their subnets and security groups, one VPC at a time.
///
/// Returns [`Fetched::Defaulted`] when the VPC listing fails or any VPC lacks
/// its id or CIDR block. Child failures only empty that child list.
pub async fn list_networks(api: &impl NetworkApi) -> Fetched<NetworkRecord> {
    log::info!("#Start list_networks()");

    let networks = match describe_networks(api).await {
        Ok(networks) => networks,
        Err(e) => {
            log_failure(&e, "Error occurred during AWS operation", "Unexpected error occurred");
            return Fetched::Defaulted(e);
        }
    };
    log::info!("Found {} VPCs", networks.len());

    let mut records = Vec::with_capacity(networks.len());
    for network in networks {
        let subnets = fetch_subnets(api, &network.vpc_id).await;
        let security_groups = fetch_security_groups(api, &network.vpc_id).await;
        log::debug!(
            "{vpc_id}: {subnets} subnets, {groups} security groups",
            vpc_id = network.vpc_id,
            subnets = subnets.items().len(),
            groups = security_groups.items().len()
        );
        records.push(network.with_children(subnets, security_groups));
    }

    Fetched::Complete(records)
}

async fn describe_networks(api: &impl NetworkApi) -> Result<Vec<NetworkRecord>, FetchError> {
    api.describe_vpcs()
        .await?
        .iter()
        .map(NetworkRecord::try_from)
        .collect()
}

/// Subnets belonging to `vpc_id`, in provider order.
pub async fn fetch_subnets(api: &impl NetworkApi, vpc_id: &str) -> Fetched<SubnetRecord> {
    let result: Result<Vec<SubnetRecord>, FetchError> = api
        .describe_subnets(vpc_id)
        .await
        .and_then(|subnets| subnets.iter().map(SubnetRecord::try_from).collect());
    result.map(Fetched::Complete).unwrap_or_else(|e| {
        log_failure(&e, "Error retrieving subnets", "Unexpected error retrieving subnets");
        Fetched::Defaulted(e)
    })
}

/// Security groups belonging to `vpc_id`, in provider order.
pub async fn fetch_security_groups(
    api: &impl NetworkApi,
    vpc_id: &str,
) -> Fetched<SecurityGroupRecord> {
    let result: Result<Vec<SecurityGroupRecord>, FetchError> = api
        .describe_security_groups(vpc_id)
        .await
        .and_then(|groups| groups.iter().map(SecurityGroupRecord::try_from).collect());
    result.map(Fetched::Complete).unwrap_or_else(|e| {
        log_failure(
            &e,
            "Error retrieving security groups",
            "Unexpected error retrieving security groups",
        );
        Fetched::Defaulted(e)
    })
}

fn log_failure(err: &FetchError, provider_msg: &str, unexpected_msg: &str) {
    log::error!("{}", failure_message(err, provider_msg, unexpected_msg));
}

/// Plain text only; colour comes from the log4rs encoder.
fn failure_message(err: &FetchError, provider_msg: &str, unexpected_msg: &str) -> String {
    let msg = if err.is_provider() {
        provider_msg
    } else {
        unexpected_msg
    };
    format!("{msg}: {err}")
}
