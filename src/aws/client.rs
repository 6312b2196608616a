//! EC2 list queries.
//!
//! [`NetworkApi`] is the seam between the report and the provider, so the
//! aggregation can run against a fixed fake in tests.

use super::FetchError;
use async_trait::async_trait;
use aws_sdk_ec2::types::{Filter, SecurityGroup, Subnet, Vpc};
use aws_sdk_ec2::Client;

/// Read-only EC2 queries the report needs.
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// All VPCs visible to the configured credentials and region.
    async fn describe_vpcs(&self) -> Result<Vec<Vpc>, FetchError>;

    /// Subnets whose parent is `vpc_id`.
    async fn describe_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>, FetchError>;

    /// Security groups whose parent is `vpc_id`.
    async fn describe_security_groups(&self, vpc_id: &str)
        -> Result<Vec<SecurityGroup>, FetchError>;
}

/// [`NetworkApi`] backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct Ec2NetworkApi {
    client: Client,
}

impl Ec2NetworkApi {
    pub fn new(client: Client) -> Ec2NetworkApi {
        Ec2NetworkApi { client }
    }

    /// Build a client from the ambient AWS configuration.
    ///
    /// Credentials, region and profile come from the environment, the shared
    /// config files or instance metadata, as resolved by `aws-config`.
    pub async fn from_env() -> Ec2NetworkApi {
        let sdk_config = aws_config::load_from_env().await;
        log::debug!(
            "Loaded AWS config region={:?}",
            sdk_config.region().map(|r| r.to_string())
        );
        Ec2NetworkApi::new(Client::new(&sdk_config))
    }
}

/// Filter matching resources that belong to `vpc_id`.
pub fn vpc_filter(vpc_id: &str) -> Filter {
    Filter::builder().name("vpc-id").values(vpc_id).build()
}

#[async_trait]
impl NetworkApi for Ec2NetworkApi {
    async fn describe_vpcs(&self) -> Result<Vec<Vpc>, FetchError> {
        log::debug!("describe_vpcs()");
        let output = self
            .client
            .describe_vpcs()
            .send()
            .await
            .map_err(FetchError::from_sdk)?;
        Ok(output.vpcs().to_vec())
    }

    async fn describe_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>, FetchError> {
        log::debug!("describe_subnets({vpc_id})");
        let output = self
            .client
            .describe_subnets()
            .filters(vpc_filter(vpc_id))
            .send()
            .await
            .map_err(FetchError::from_sdk)?;
        Ok(output.subnets().to_vec())
    }

    async fn describe_security_groups(
        &self,
        vpc_id: &str,
    ) -> Result<Vec<SecurityGroup>, FetchError> {
        log::debug!("describe_security_groups({vpc_id})");
        let output = self
            .client
            .describe_security_groups()
            .filters(vpc_filter(vpc_id))
            .send()
            .await
            .map_err(FetchError::from_sdk)?;
        Ok(output.security_groups().to_vec())
    }
}
