//! Subnet models

use serde::{Deserialize, Serialize};

use crate::softlayer::models::{opt_flexible_f64, Datacenter, TagReference};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkVlan {
    pub id: Option<i64>,
    pub vlan_number: Option<i64>,
    pub network_space: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetIpAddress {
    pub id: Option<i64>,
    pub ip_address: Option<String>,
    pub note: Option<String>,
}

/// Server attached to a subnet, virtual or bare metal
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetHost {
    pub id: Option<i64>,
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub primary_ip_address: Option<String>,
    pub primary_backend_ip_address: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    pub id: Option<i64>,
    pub network_identifier: Option<String>,
    pub cidr: Option<i64>,
    pub subnet_type: Option<String>,
    pub gateway: Option<String>,
    pub broadcast_address: Option<String>,
    pub version: Option<i64>,
    pub ip_address_count: Option<i64>,
    #[serde(default, deserialize_with = "opt_flexible_f64")]
    pub usable_ip_address_count: Option<f64>,
    pub datacenter: Option<Datacenter>,
    pub network_vlan: Option<NetworkVlan>,
    pub ip_addresses: Option<Vec<SubnetIpAddress>>,
    pub virtual_guests: Option<Vec<SubnetHost>>,
    pub hardware: Option<Vec<SubnetHost>>,
    pub tag_references: Option<Vec<TagReference>>,
}

impl Subnet {
    pub fn datacenter_name(&self) -> Option<&str> {
        self.datacenter.as_ref()?.name.as_deref()
    }

    pub fn network_space(&self) -> Option<&str> {
        self.network_vlan.as_ref()?.network_space.as_deref()
    }

    pub fn vlan_id(&self) -> Option<i64> {
        self.network_vlan.as_ref()?.id
    }

    pub fn hardware_count(&self) -> Option<usize> {
        self.hardware.as_ref().map(Vec::len)
    }

    pub fn virtual_guest_count(&self) -> Option<usize> {
        self.virtual_guests.as_ref().map(Vec::len)
    }

    /// Usable address count shown as a whole number
    pub fn usable_ips(&self) -> Option<i64> {
        self.usable_ip_address_count.map(|v| v as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_subnet() {
        let subnet: Subnet = serde_json::from_value(json!({
            "id": 1,
            "networkIdentifier": "10.0.0.0",
            "cidr": 26,
            "usableIpAddressCount": "61",
            "networkVlan": {"id": 900, "networkSpace": "PRIVATE"},
            "hardware": [{"id": 1}, {"id": 2}],
            "virtualGuests": []
        }))
        .unwrap();
        assert_eq!(subnet.usable_ips(), Some(61));
        assert_eq!(subnet.network_space(), Some("PRIVATE"));
        assert_eq!(subnet.vlan_id(), Some(900));
        assert_eq!(subnet.hardware_count(), Some(2));
        assert_eq!(subnet.virtual_guest_count(), Some(0));
    }

    #[test]
    fn test_usable_count_as_number() {
        let subnet: Subnet =
            serde_json::from_value(json!({"usableIpAddressCount": 5.0})).unwrap();
        assert_eq!(subnet.usable_ip_address_count, Some(5.0));
        let missing: Subnet = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.usable_ips(), None);
        assert_eq!(missing.hardware_count(), None);
    }
}
