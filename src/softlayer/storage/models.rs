//! Network storage models

use serde::{Deserialize, Serialize};

use crate::softlayer::models::{created_by, BillingItem, Datacenter, Transaction};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorageType {
    pub key_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResource {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub datacenter: Option<Datacenter>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleType {
    pub keyname: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSchedule {
    #[serde(rename = "type")]
    pub schedule_type: Option<ScheduleType>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointIpAddress {
    pub ip_address: Option<String>,
}

/// Subnet as it appears inside an access list
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowedSubnet {
    pub id: Option<i64>,
    pub network_identifier: Option<String>,
    pub cidr: Option<i64>,
    pub note: Option<String>,
    pub end_point_ip_address: Option<EndpointIpAddress>,
    pub allowed_host: Option<AllowedHost>,
}

/// The initiator record that carries credentials for one authorized object
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowedHost {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub source_subnet: Option<String>,
    pub credential: Option<Credential>,
    pub subnets_in_acl: Option<Vec<AllowedSubnet>>,
}

/// Virtual or bare-metal server authorized on a volume
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowedDevice {
    pub id: Option<i64>,
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub primary_backend_ip_address: Option<String>,
    pub allowed_host: Option<AllowedHost>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowedIpAddress {
    pub id: Option<i64>,
    pub ip_address: Option<String>,
    pub note: Option<String>,
    pub allowed_host: Option<AllowedHost>,
}

/// Block or file volume, or one of its snapshots
///
/// Byte counts and a few other numbers arrive as strings from the API and
/// are kept that way.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStorage {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub capacity_gb: Option<i64>,
    pub bytes_used: Option<String>,
    pub iops: Option<String>,
    pub lun_id: Option<String>,
    pub notes: Option<String>,
    pub storage_type: Option<StorageType>,
    pub storage_tier_level: Option<String>,
    pub service_resource: Option<ServiceResource>,
    pub service_resource_backend_ip_address: Option<String>,
    pub file_network_mount_address: Option<String>,
    pub active_transaction_count: Option<i64>,
    pub active_transactions: Option<Vec<Transaction>>,
    pub replication_partner_count: Option<i64>,
    pub replication_status: Option<String>,
    pub replication_partners: Option<Vec<NetworkStorage>>,
    pub replication_schedule: Option<ReplicationSchedule>,
    pub snapshot_capacity_gb: Option<String>,
    pub snapshot_size_bytes: Option<String>,
    pub snapshot_creation_timestamp: Option<String>,
    pub parent_volume: Option<Box<NetworkStorage>>,
    pub original_volume_name: Option<String>,
    pub original_volume_size: Option<String>,
    pub original_snapshot_name: Option<String>,
    pub has_encryption_at_rest: Option<bool>,
    pub billing_item: Option<BillingItem>,
    pub allowed_virtual_guests: Option<Vec<AllowedDevice>>,
    pub allowed_hardware: Option<Vec<AllowedDevice>>,
    pub allowed_subnets: Option<Vec<AllowedSubnet>>,
    pub allowed_ip_addresses: Option<Vec<AllowedIpAddress>>,
}

impl NetworkStorage {
    pub fn datacenter_name(&self) -> Option<&str> {
        self.service_resource.as_ref()?.datacenter.as_ref()?.name.as_deref()
    }

    pub fn storage_type_key(&self) -> Option<&str> {
        self.storage_type.as_ref()?.key_name.as_deref()
    }

    /// Storage type key in lower case, as displayed
    pub fn storage_type_label(&self) -> Option<String> {
        self.storage_type_key().map(str::to_lowercase)
    }

    pub fn created_by(&self) -> Option<&str> {
        created_by(&self.billing_item)
    }

    pub fn schedule_keyname(&self) -> Option<&str> {
        self.replication_schedule
            .as_ref()?
            .schedule_type
            .as_ref()?
            .keyname
            .as_deref()
    }

    /// Notes are stored form-encoded; undecodable text is returned as is
    pub fn decoded_notes(&self) -> Option<String> {
        self.notes.as_deref().map(|raw| {
            let spaced = raw.replace('+', " ");
            match urlencoding::decode(&spaced) {
                Ok(text) => text.into_owned(),
                Err(_) => raw.to_string(),
            }
        })
    }

    /// Friendly names of the running transactions
    pub fn transaction_names(&self) -> Vec<&str> {
        self.active_transactions
            .iter()
            .flatten()
            .filter_map(|t| t.transaction_status.as_ref()?.friendly_name.as_deref())
            .collect()
    }
}

/// One host authorized to access a volume, flattened for display
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct AccessEntry {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub private_ip_address: Option<String>,
    pub source_subnet: Option<String>,
    pub host_iqn: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub allowed_host_id: Option<i64>,
}
