//! Bare-metal server models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::softlayer::models::{BillingItem, Datacenter, TagReference};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HardwareStatus {
    pub id: Option<i64>,
    pub status: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareDescription {
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareLicense {
    pub software_description: Option<SoftwareDescription>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystem {
    pub software_license: Option<SoftwareLicense>,
}

/// Bare-metal server as returned by `SoftLayer_Account::getHardware`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    pub id: Option<i64>,
    pub global_identifier: Option<String>,
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub primary_ip_address: Option<String>,
    pub primary_backend_ip_address: Option<String>,
    pub network_management_ip_address: Option<String>,
    pub processor_physical_core_amount: Option<i64>,
    pub memory_capacity: Option<i64>,
    pub datacenter: Option<Datacenter>,
    pub hardware_status: Option<HardwareStatus>,
    pub operating_system: Option<OperatingSystem>,
    pub provision_date: Option<DateTime<FixedOffset>>,
    pub billing_item: Option<BillingItem>,
    pub tag_references: Option<Vec<TagReference>>,
}

impl Hardware {
    pub fn datacenter_name(&self) -> Option<&str> {
        self.datacenter.as_ref()?.name.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.hardware_status.as_ref()?.status.as_deref()
    }

    /// Operating system name from the software license
    pub fn os_name(&self) -> Option<&str> {
        self.operating_system
            .as_ref()?
            .software_license
            .as_ref()?
            .software_description
            .as_ref()?
            .name
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_partial_server() {
        let hw: Hardware = serde_json::from_value(json!({
            "id": 1001,
            "hostname": "db01",
            "datacenter": {"name": "dal10"},
            "hardwareStatus": {"status": "ACTIVE"},
            "operatingSystem": {"softwareLicense": {"softwareDescription": {"name": "Ubuntu"}}},
            "provisionDate": "2023-01-05T08:00:00-06:00"
        }))
        .unwrap();
        assert_eq!(hw.id, Some(1001));
        assert_eq!(hw.datacenter_name(), Some("dal10"));
        assert_eq!(hw.status(), Some("ACTIVE"));
        assert_eq!(hw.os_name(), Some("Ubuntu"));
        assert!(hw.provision_date.is_some());
        assert!(hw.domain.is_none());
    }

    #[test]
    fn test_accessors_on_empty_server() {
        let hw = Hardware::default();
        assert_eq!(hw.datacenter_name(), None);
        assert_eq!(hw.status(), None);
        assert_eq!(hw.os_name(), None);
    }
}
