//! EC2 security group record.

use super::required;
use crate::aws::FetchError;
use aws_sdk_ec2::types::IpPermission;

/// A security group inside one VPC.
///
/// Rules are kept exactly as the provider returned them. The report does not
/// print them.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityGroupRecord {
    pub group_id: String,
    pub group_name: String,
    pub description: String,
    pub inbound_rules: Vec<IpPermission>,
    pub outbound_rules: Vec<IpPermission>,
}

impl TryFrom<&aws_sdk_ec2::types::SecurityGroup> for SecurityGroupRecord {
    type Error = FetchError;

    fn try_from(sg: &aws_sdk_ec2::types::SecurityGroup) -> Result<Self, Self::Error> {
        Ok(SecurityGroupRecord {
            group_id: required(sg.group_id(), "security group", "GroupId")?,
            group_name: required(sg.group_name(), "security group", "GroupName")?,
            description: required(sg.description(), "security group", "Description")?,
            inbound_rules: sg.ip_permissions().to_vec(),
            outbound_rules: sg.ip_permissions_egress().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{IpRange, SecurityGroup, UserIdGroupPair};

    #[test]
    fn test_rules_pass_through_unmodified() {
        let inbound = vec![
            IpPermission::builder()
                .ip_protocol("tcp")
                .from_port(443)
                .to_port(443)
                .ip_ranges(
                    IpRange::builder()
                        .cidr_ip("0.0.0.0/0")
                        .description("https")
                        .build(),
                )
                .build(),
            IpPermission::builder()
                .ip_protocol("-1")
                .user_id_group_pairs(UserIdGroupPair::builder().group_id("sg-peer").build())
                .build(),
        ];
        let outbound = vec![IpPermission::builder().ip_protocol("-1").build()];

        let sg = SecurityGroup::builder()
            .group_id("sg-1")
            .group_name("web")
            .description("web tier")
            .set_ip_permissions(Some(inbound.clone()))
            .set_ip_permissions_egress(Some(outbound.clone()))
            .build();

        let record = SecurityGroupRecord::try_from(&sg).unwrap();
        assert_eq!(record.group_id, "sg-1");
        assert_eq!(record.group_name, "web");
        assert_eq!(record.description, "web tier");
        assert_eq!(record.inbound_rules, inbound);
        assert_eq!(record.outbound_rules, outbound);
    }

    #[test]
    fn test_absent_rule_lists_read_as_empty() {
        let sg = SecurityGroup::builder()
            .group_id("sg-2")
            .group_name("empty")
            .description("")
            .build();
        let record = SecurityGroupRecord::try_from(&sg).unwrap();
        assert!(record.inbound_rules.is_empty());
        assert!(record.outbound_rules.is_empty());
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_missing_description_is_rejected() {
        let sg = SecurityGroup::builder()
            .group_id("sg-3")
            .group_name("nodesc")
            .build();
        assert!(matches!(
            SecurityGroupRecord::try_from(&sg),
            Err(FetchError::MissingField {
                field: "Description",
                ..
            })
        ));
    }
}
