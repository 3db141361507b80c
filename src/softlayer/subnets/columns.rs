//! Subnet column registry

use super::models::Subnet;
use crate::output::format::fmt_opt;
use crate::query::{less_opt, ColumnRegistry, ColumnSpec, SortKey};

pub static SUBNETS: ColumnRegistry<Subnet> = ColumnRegistry {
    resource: "subnet",
    base_mask: "",
    defaults: &[
        ColumnSpec {
            key: "id",
            header: "ID",
            mask: "id",
            format: |s| fmt_opt(s.id),
        },
        ColumnSpec {
            key: "identifier",
            header: "identifier",
            mask: "networkIdentifier",
            format: |s| fmt_opt(s.network_identifier.as_deref()),
        },
        ColumnSpec {
            key: "type",
            header: "type",
            mask: "subnetType",
            format: |s| fmt_opt(s.subnet_type.as_deref()),
        },
        ColumnSpec {
            key: "network_space",
            header: "network_space",
            mask: "networkVlan.networkSpace",
            format: |s| fmt_opt(s.network_space()),
        },
        ColumnSpec {
            key: "datacenter",
            header: "datacenter",
            mask: "datacenter.name",
            format: |s| fmt_opt(s.datacenter_name()),
        },
        ColumnSpec {
            key: "vlan_id",
            header: "vlan_id",
            mask: "networkVlan.id",
            format: |s| fmt_opt(s.vlan_id()),
        },
        ColumnSpec {
            key: "IPs",
            header: "IPs",
            mask: "ipAddressCount",
            format: |s| fmt_opt(s.ip_address_count),
        },
        ColumnSpec {
            key: "hardware",
            header: "hardware",
            mask: "hardware.id",
            format: |s| fmt_opt(s.hardware_count()),
        },
        ColumnSpec {
            key: "vs",
            header: "virtual_servers",
            mask: "virtualGuests.id",
            format: |s| fmt_opt(s.virtual_guest_count()),
        },
    ],
    optional: &[],
    sort_keys: &[
        SortKey {
            key: "id",
            less: |a, b| less_opt(a.id.as_ref(), b.id.as_ref()),
        },
        SortKey {
            key: "identifier",
            less: |a, b| less_opt(a.network_identifier.as_deref(), b.network_identifier.as_deref()),
        },
        SortKey {
            key: "type",
            less: |a, b| less_opt(a.subnet_type.as_deref(), b.subnet_type.as_deref()),
        },
        SortKey {
            key: "network_space",
            less: |a, b| less_opt(a.network_space(), b.network_space()),
        },
        SortKey {
            key: "datacenter",
            less: |a, b| less_opt(a.datacenter_name(), b.datacenter_name()),
        },
        SortKey {
            key: "vlan_id",
            less: |a, b| less_opt(a.vlan_id().as_ref(), b.vlan_id().as_ref()),
        },
        SortKey {
            key: "IPs",
            less: |a, b| less_opt(a.ip_address_count.as_ref(), b.ip_address_count.as_ref()),
        },
        SortKey {
            key: "hardware",
            less: |a, b| less_opt(a.hardware_count().as_ref(), b.hardware_count().as_ref()),
        },
        SortKey {
            key: "vs",
            less: |a, b| {
                less_opt(
                    a.virtual_guest_count().as_ref(),
                    b.virtual_guest_count().as_ref(),
                )
            },
        },
    ],
    default_sort: "id",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlError;
    use crate::query::ColumnFlag;
    use serde_json::json;

    fn subnet(value: serde_json::Value) -> Subnet {
        serde_json::from_value(value).unwrap()
    }

    fn ids(subnets: &[Subnet]) -> Vec<i64> {
        subnets.iter().filter_map(|s| s.id).collect()
    }

    #[test]
    fn test_default_mask() {
        let cols = SUBNETS.resolve("id", &[], ColumnFlag::Column).unwrap();
        assert_eq!(
            SUBNETS.mask(&cols, "id"),
            "id,networkIdentifier,subnetType,networkVlan.networkSpace,datacenter.name,\
networkVlan.id,ipAddressCount,hardware.id,virtualGuests.id"
        );
    }

    #[test]
    fn test_headers_differ_from_keys() {
        assert_eq!(SUBNETS.column("id").unwrap().header, "ID");
        assert_eq!(SUBNETS.column("vs").unwrap().header, "virtual_servers");
    }

    #[test]
    fn test_sort_by_ip_count() {
        let mut subnets = vec![
            subnet(json!({"id": 1, "ipAddressCount": 64})),
            subnet(json!({"id": 2, "ipAddressCount": 8})),
        ];
        SUBNETS.sort(&mut subnets, "IPs");
        assert_eq!(ids(&subnets), vec![2, 1]);
    }

    #[test]
    fn test_sort_by_hardware_count() {
        let mut subnets = vec![
            subnet(json!({"id": 1, "hardware": [{"id": 1}, {"id": 2}]})),
            subnet(json!({"id": 2, "hardware": []})),
            subnet(json!({"id": 3, "hardware": [{"id": 3}]})),
        ];
        SUBNETS.sort(&mut subnets, "hardware");
        assert_eq!(ids(&subnets), vec![2, 3, 1]);
    }

    #[test]
    fn test_usable_ips_only_in_detail() {
        let err = SUBNETS
            .resolve("usable_ips", &[], ColumnFlag::Column)
            .err()
            .unwrap();
        assert!(matches!(err, SlError::UnsupportedSortKey(ref key) if key == "usable_ips"));
        let err = SUBNETS
            .resolve("id", &["usable_ips".to_string()], ColumnFlag::Column)
            .err()
            .unwrap();
        assert!(matches!(err, SlError::InvalidColumn(ref col) if col == "usable_ips"));
    }
}
