//! Security group models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupRule {
    pub id: Option<i64>,
    pub security_group_id: Option<i64>,
    pub remote_ip: Option<String>,
    pub remote_group_id: Option<i64>,
    pub direction: Option<String>,
    pub ethertype: Option<String>,
    pub port_range_min: Option<i64>,
    pub port_range_max: Option<i64>,
    pub protocol: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoundGuest {
    pub id: Option<i64>,
    pub hostname: Option<String>,
    pub primary_ip_address: Option<String>,
    pub primary_backend_ip_address: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkComponent {
    pub id: Option<i64>,
    pub port: Option<i64>,
    pub guest: Option<BoundGuest>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkComponentBinding {
    pub id: Option<i64>,
    pub network_component_id: Option<i64>,
    pub network_component: Option<NetworkComponent>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroup {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub create_date: Option<DateTime<FixedOffset>>,
    pub modify_date: Option<DateTime<FixedOffset>>,
    pub rules: Option<Vec<SecurityGroupRule>>,
    pub network_component_bindings: Option<Vec<NetworkComponentBinding>>,
}

/// A virtual server interface bound to a security group
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupInterface {
    pub id: Option<i64>,
    pub virtual_server_id: Option<i64>,
    pub hostname: Option<String>,
    pub interface: String,
    pub ip_address: Option<String>,
}

impl GroupInterface {
    /// Port 0 (or no port) is the private interface
    fn from_component(component: &NetworkComponent, guest: &BoundGuest) -> Self {
        let public = component.port.is_some_and(|port| port != 0);
        let (interface, ip_address) = if public {
            ("public", guest.primary_ip_address.clone())
        } else {
            ("private", guest.primary_backend_ip_address.clone())
        };
        Self {
            id: component.id,
            virtual_server_id: guest.id,
            hostname: guest.hostname.clone(),
            interface: interface.to_string(),
            ip_address,
        }
    }
}

/// Interfaces of the bindings that point at a virtual server
pub fn interfaces(bindings: &[NetworkComponentBinding]) -> Vec<GroupInterface> {
    bindings
        .iter()
        .filter_map(|binding| {
            let component = binding.network_component.as_ref()?;
            let guest = component.guest.as_ref()?;
            Some(GroupInterface::from_component(component, guest))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interfaces_pick_ip_by_port() {
        let bindings: Vec<NetworkComponentBinding> = serde_json::from_value(json!([
            {"networkComponent": {"id": 1, "port": 0, "guest": {
                "id": 100, "hostname": "vs1",
                "primaryIpAddress": "169.0.0.1", "primaryBackendIpAddress": "10.0.0.1"
            }}},
            {"networkComponent": {"id": 2, "port": 1, "guest": {
                "id": 100, "hostname": "vs1",
                "primaryIpAddress": "169.0.0.1", "primaryBackendIpAddress": "10.0.0.1"
            }}},
            {"networkComponent": {"id": 3, "guest": {"id": 101}}},
            {"networkComponent": {"id": 4}},
            {"networkComponentId": 5}
        ]))
        .unwrap();
        let found = interfaces(&bindings);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].interface, "private");
        assert_eq!(found[0].ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(found[1].interface, "public");
        assert_eq!(found[1].ip_address.as_deref(), Some("169.0.0.1"));
        assert_eq!(found[2].interface, "private");
        assert_eq!(found[2].virtual_server_id, Some(101));
    }

    #[test]
    fn test_interface_json_is_camel_case() {
        let iface = GroupInterface {
            virtual_server_id: Some(9),
            interface: "public".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&iface).unwrap();
        assert_eq!(value["virtualServerId"], 9);
        assert!(value["ipAddress"].is_null());
    }
}
