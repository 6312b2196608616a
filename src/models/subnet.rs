//! EC2 subnet record.

use super::required;
use crate::aws::FetchError;

/// A subnet inside one VPC, scoped to one availability zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    pub subnet_id: String,
    pub cidr_block: String,
    pub availability_zone: String,
}

impl TryFrom<&aws_sdk_ec2::types::Subnet> for SubnetRecord {
    type Error = FetchError;

    fn try_from(subnet: &aws_sdk_ec2::types::Subnet) -> Result<Self, Self::Error> {
        Ok(SubnetRecord {
            subnet_id: required(subnet.subnet_id(), "subnet", "SubnetId")?,
            cidr_block: required(subnet.cidr_block(), "subnet", "CidrBlock")?,
            availability_zone: required(subnet.availability_zone(), "subnet", "AvailabilityZone")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::Subnet;

    #[test]
    fn test_from_sdk_subnet() {
        let subnet = Subnet::builder()
            .subnet_id("subnet-0a1")
            .cidr_block("10.0.1.0/24")
            .availability_zone("eu-west-1a")
            .vpc_id("vpc-1")
            .build();
        let record = SubnetRecord::try_from(&subnet).unwrap();
        assert_eq!(record.subnet_id, "subnet-0a1");
        assert_eq!(record.cidr_block, "10.0.1.0/24");
        assert_eq!(record.availability_zone, "eu-west-1a");
    }

    #[test]
    fn test_missing_zone_is_rejected() {
        let subnet = Subnet::builder()
            .subnet_id("subnet-0a1")
            .cidr_block("10.0.1.0/24")
            .build();
        assert_eq!(
            SubnetRecord::try_from(&subnet).unwrap_err(),
            FetchError::MissingField {
                resource: "subnet",
                field: "AvailabilityZone"
            }
        );
    }
}
