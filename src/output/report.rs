//! Console report for VPCs.

use super::AsciiTable;
use crate::models::NetworkRecord;
use std::io::{self, Write};

/// Line printed after each VPC section.
const SECTION_SEPARATOR: &str = "------------------------------------";

/// Write one section per VPC, in the order given.
///
/// Security group rules are carried in the records but not printed.
pub fn render_report<W: Write>(out: &mut W, networks: &[NetworkRecord]) -> io::Result<()> {
    for network in networks {
        render_network(out, network)?;
    }
    out.flush()
}

/// Write the header lines and the subnet and security group tables of one VPC.
fn render_network<W: Write>(out: &mut W, network: &NetworkRecord) -> io::Result<()> {
    writeln!(out, "VPC ID: {}", network.vpc_id)?;
    writeln!(out, "CIDR Block: {}", network.cidr_block)?;
    writeln!(out, "Tags: {}", network.tags)?;

    let mut subnet_table = AsciiTable::new(["Subnet ID", "CIDR Block", "Availability Zone"]);
    for subnet in network.subnets.items() {
        subnet_table.add_row([
            subnet.subnet_id.as_str(),
            subnet.cidr_block.as_str(),
            subnet.availability_zone.as_str(),
        ]);
    }
    writeln!(out, "\nSubnets:")?;
    writeln!(out, "{subnet_table}")?;

    let mut sg_table = AsciiTable::new(["Group ID", "Group Name", "Description"]);
    for sg in network.security_groups.items() {
        sg_table.add_row([
            sg.group_id.as_str(),
            sg.group_name.as_str(),
            sg.description.as_str(),
        ]);
    }
    writeln!(out, "\nSecurity Groups:")?;
    writeln!(out, "{sg_table}")?;
    writeln!(out, "{SECTION_SEPARATOR}\n")?;

    Ok(())
}
