//! EC2 virtual network (VPC) record.

use super::{required, Fetched, SecurityGroupRecord, SubnetRecord, Tags};
use crate::aws::FetchError;

/// A VPC with the subnets and security groups fetched for it.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRecord {
    pub vpc_id: String,
    /// Primary IPv4 CIDR block of the VPC.
    pub cidr_block: String,
    pub tags: Tags,
    pub subnets: Fetched<SubnetRecord>,
    pub security_groups: Fetched<SecurityGroupRecord>,
}

impl NetworkRecord {
    /// Attach the child resources fetched for this VPC.
    pub fn with_children(
        self,
        subnets: Fetched<SubnetRecord>,
        security_groups: Fetched<SecurityGroupRecord>,
    ) -> NetworkRecord {
        NetworkRecord {
            subnets,
            security_groups,
            ..self
        }
    }
}

/// Children start out as complete-but-empty until [`NetworkRecord::with_children`].
impl TryFrom<&aws_sdk_ec2::types::Vpc> for NetworkRecord {
    type Error = FetchError;

    fn try_from(vpc: &aws_sdk_ec2::types::Vpc) -> Result<Self, Self::Error> {
        Ok(NetworkRecord {
            vpc_id: required(vpc.vpc_id(), "vpc", "VpcId")?,
            cidr_block: required(vpc.cidr_block(), "vpc", "CidrBlock")?,
            tags: Tags::from(vpc.tags()),
            subnets: Fetched::default(),
            security_groups: Fetched::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{Tag, Vpc};

    #[test]
    fn test_from_sdk_vpc() {
        let vpc = Vpc::builder()
            .vpc_id("vpc-0abc")
            .cidr_block("10.0.0.0/16")
            .tags(Tag::builder().key("Env").value("prod").build())
            .tags(Tag::builder().key("Team").value("infra").build())
            .build();
        let record = NetworkRecord::try_from(&vpc).unwrap();
        assert_eq!(record.vpc_id, "vpc-0abc");
        assert_eq!(record.cidr_block, "10.0.0.0/16");
        assert_eq!(record.tags.to_string(), "Env=prod, Team=infra");
        assert!(record.subnets.items().is_empty());
        assert!(!record.subnets.is_defaulted());
    }

    #[test]
    fn test_untagged_vpc() {
        let vpc = Vpc::builder()
            .vpc_id("vpc-1")
            .cidr_block("172.31.0.0/16")
            .build();
        let record = NetworkRecord::try_from(&vpc).unwrap();
        assert_eq!(record.tags, Tags::new());
        assert_eq!(record.tags.to_string(), "");
    }

    #[test]
    fn test_missing_cidr_is_rejected() {
        let vpc = Vpc::builder().vpc_id("vpc-1").build();
        assert_eq!(
            NetworkRecord::try_from(&vpc).unwrap_err(),
            FetchError::MissingField {
                resource: "vpc",
                field: "CidrBlock"
            }
        );
    }

    #[test]
    fn test_with_children() {
        let vpc = Vpc::builder()
            .vpc_id("vpc-1")
            .cidr_block("10.1.0.0/16")
            .build();
        let subnet = SubnetRecord {
            subnet_id: "subnet-1".to_string(),
            cidr_block: "10.1.0.0/24".to_string(),
            availability_zone: "us-east-1a".to_string(),
        };
        let record = NetworkRecord::try_from(&vpc).unwrap().with_children(
            Fetched::Complete(vec![subnet.clone()]),
            Fetched::Defaulted(FetchError::Unexpected("timeout".to_string())),
        );
        assert_eq!(record.vpc_id, "vpc-1");
        assert_eq!(record.subnets.items(), &[subnet]);
        assert!(record.security_groups.is_defaulted());
    }
}
