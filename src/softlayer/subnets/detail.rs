//! Subnet detail table

use super::models::{Subnet, SubnetHost};
use crate::output::format::fmt_opt;
use crate::output::Table;
use crate::query::build_mask;

const NONE: &str = "none";

/// Which related collections the detail view includes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSections {
    pub ip_addresses: bool,
    pub virtual_guests: bool,
    pub hardware: bool,
    pub tags: bool,
}

impl Default for DetailSections {
    fn default() -> Self {
        Self {
            ip_addresses: true,
            virtual_guests: true,
            hardware: true,
            tags: true,
        }
    }
}

/// Fields fetched for the detail view; hidden sections are not requested
pub fn detail_mask(sections: DetailSections) -> String {
    let optional = [
        (sections.ip_addresses, "ipAddresses[id,ipAddress,note]"),
        (sections.virtual_guests, "virtualGuests"),
        (sections.hardware, "hardware"),
        (sections.tags, "tagReferences"),
    ];
    build_mask(
        [
            "id",
            "networkIdentifier",
            "cidr",
            "subnetType",
            "gateway",
            "broadcastAddress",
            "usableIpAddressCount",
            "datacenter",
            "networkVlan[networkSpace]",
        ]
        .into_iter()
        .chain(optional.into_iter().filter(|(on, _)| *on).map(|(_, path)| path)),
    )
}

fn hosts_table(hosts: &[SubnetHost]) -> Table {
    let mut table = Table::new(["hostname", "domain", "public_ip", "private_ip"]);
    for host in hosts {
        table.add_row([
            fmt_opt(host.hostname.as_deref()),
            fmt_opt(host.domain.as_deref()),
            fmt_opt(host.primary_ip_address.as_deref()),
            fmt_opt(host.primary_backend_ip_address.as_deref()),
        ]);
    }
    table
}

/// Add a nested table, or `none` when the collection is empty
fn add_section<T>(table: &mut Table, name: &str, items: Option<&Vec<T>>, build: impl Fn(&[T]) -> Table) {
    match items {
        Some(items) if !items.is_empty() => table.add_pair(name, build(items.as_slice())),
        _ => table.add_pair(name, NONE),
    }
}

/// Name/value table describing one subnet
pub fn subnet_table(subnet: &Subnet, sections: DetailSections) -> Table {
    let mut table = Table::new(["Name", "Value"]);
    table.add_pair("ID", fmt_opt(subnet.id));
    table.add_pair(
        "identifier",
        format!(
            "{}/{}",
            fmt_opt(subnet.network_identifier.as_deref()),
            fmt_opt(subnet.cidr)
        ),
    );
    if let Some(subnet_type) = &subnet.subnet_type {
        table.add_pair("subnet type", subnet_type.as_str());
    }
    if subnet.network_vlan.is_some() {
        table.add_pair("network space", fmt_opt(subnet.network_space()));
    }
    table.add_pair("gateway", fmt_opt(subnet.gateway.as_deref()));
    table.add_pair("broadcast", fmt_opt(subnet.broadcast_address.as_deref()));
    if let Some(datacenter) = subnet.datacenter_name() {
        table.add_pair("datacenter", datacenter);
    }
    table.add_pair("usable ips", fmt_opt(subnet.usable_ips()));

    if sections.ip_addresses {
        add_section(&mut table, "ip address", subnet.ip_addresses.as_ref(), |ips| {
            let mut nested = Table::new(["ip", "ipAddress"]);
            for ip in ips {
                nested.add_row([fmt_opt(ip.id), fmt_opt(ip.ip_address.as_deref())]);
            }
            nested
        });
    }
    if sections.virtual_guests {
        add_section(&mut table, "virtual guests", subnet.virtual_guests.as_ref(), hosts_table);
    }
    if sections.hardware {
        add_section(&mut table, "hardware", subnet.hardware.as_ref(), hosts_table);
    }
    if sections.tags {
        add_section(&mut table, "tags", subnet.tag_references.as_ref(), |tags| {
            let mut nested = Table::new(["id"]);
            for tag in tags {
                nested.add_row([fmt_opt(tag.tag_id)]);
            }
            nested
        });
    }
    table
}
