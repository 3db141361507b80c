//! Security group detail table

use super::models::{interfaces, GroupInterface, SecurityGroup, SecurityGroupRule};
use crate::output::format::fmt_opt;
use crate::output::Table;

pub const DETAIL_MASK: &str = "id,name,description,\
rules[id,remoteIp,remoteGroupId,direction,ethertype,portRangeMin,portRangeMax,protocol],\
networkComponentBindings[networkComponent[id,port,guest[id,hostname,primaryBackendIpAddress,primaryIpAddress]]]";

fn rules_table(rules: &[SecurityGroupRule]) -> Table {
    let mut table = Table::new([
        "ID",
        "Remote IP",
        "Remote Group ID",
        "Direction",
        "Ether Type",
        "Port Range Min",
        "Port Range Max",
        "Protocol",
    ]);
    for rule in rules {
        table.add_row([
            fmt_opt(rule.id),
            fmt_opt(rule.remote_ip.as_deref()),
            fmt_opt(rule.remote_group_id),
            fmt_opt(rule.direction.as_deref()),
            fmt_opt(rule.ethertype.as_deref()),
            fmt_opt(rule.port_range_min),
            fmt_opt(rule.port_range_max),
            fmt_opt(rule.protocol.as_deref()),
        ]);
    }
    table
}

fn servers_table(servers: &[GroupInterface]) -> Table {
    let mut table = Table::new(["ID", "Hostname", "Interface", "IP address"]);
    for server in servers {
        table.add_row([
            fmt_opt(server.virtual_server_id),
            fmt_opt(server.hostname.as_deref()),
            server.interface.clone(),
            fmt_opt(server.ip_address.as_deref()),
        ]);
    }
    table
}

/// Name/value table describing one security group
pub fn group_table(group: &SecurityGroup) -> Table {
    let mut table = Table::new(["Name", "Value"]);
    table.add_pair("ID", fmt_opt(group.id));
    table.add_pair("Name", fmt_opt(group.name.as_deref()));
    table.add_pair("Description", fmt_opt(group.description.as_deref()));
    table.add_pair(
        "Rules",
        rules_table(group.rules.as_deref().unwrap_or_default()),
    );
    let servers = interfaces(group.network_component_bindings.as_deref().unwrap_or_default());
    table.add_pair("Servers", servers_table(&servers));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{render_csv, Cell};
    use serde_json::json;

    fn group() -> SecurityGroup {
        serde_json::from_value(json!({
            "id": 5,
            "name": "web",
            "rules": [
                {"id": 1, "direction": "ingress", "ethertype": "IPv4",
                 "portRangeMin": 443, "portRangeMax": 443, "protocol": "tcp"}
            ],
            "networkComponentBindings": [
                {"networkComponent": {"id": 7, "port": 1, "guest": {
                    "id": 100, "hostname": "vs1", "primaryIpAddress": "169.1.1.1"
                }}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_group_table_rows() {
        let table = group_table(&group());
        let names: Vec<_> = table.rows().iter().map(|r| r[0].to_string()).collect();
        assert_eq!(names, vec!["ID", "Name", "Description", "Rules", "Servers"]);
        assert_eq!(table.rows()[2][1].to_string(), "-");
    }

    #[test]
    fn test_group_table_nests_rules_and_servers() {
        let table = group_table(&group());
        match &table.rows()[3][1] {
            Cell::Nested(rules) => {
                assert_eq!(rules.rows().len(), 1);
                assert_eq!(rules.rows()[0][2].to_string(), "-");
                assert_eq!(rules.rows()[0][7].to_string(), "tcp");
            }
            other => panic!("Expected nested rules, got {:?}", other),
        }
        let csv = render_csv(&table);
        assert!(csv.contains("Servers,100 vs1 public 169.1.1.1"));
    }

    #[test]
    fn test_group_without_rules_has_empty_nested_tables() {
        let group = SecurityGroup {
            id: Some(1),
            ..Default::default()
        };
        let table = group_table(&group);
        match &table.rows()[3][1] {
            Cell::Nested(rules) => assert!(rules.is_empty()),
            other => panic!("Expected nested rules, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_mask_names_bindings() {
        assert!(DETAIL_MASK.contains("networkComponentBindings[networkComponent[id,port,guest["));
        assert!(!DETAIL_MASK.contains(' '));
    }
}
