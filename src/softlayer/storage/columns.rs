//! Column registries for volumes, snapshots and access lists
//!
//! Block and file volume listings share most columns. File volumes add the
//! NFS mount address and sort by it instead of the LUN id.

use super::models::{AccessEntry, NetworkStorage};
use crate::output::format::{fmt_opt, shorten};
use crate::query::{greater_opt, less_numeric_str, less_opt, ColumnRegistry, ColumnSpec, SortKey};

type VolumeColumn = ColumnSpec<NetworkStorage>;
type VolumeSort = SortKey<NetworkStorage>;

const ID: VolumeColumn = ColumnSpec {
    key: "id",
    header: "id",
    mask: "id",
    format: |v| fmt_opt(v.id),
};
const USERNAME: VolumeColumn = ColumnSpec {
    key: "username",
    header: "username",
    mask: "username",
    format: |v| fmt_opt(v.username.as_deref()),
};
const DATACENTER: VolumeColumn = ColumnSpec {
    key: "datacenter",
    header: "datacenter",
    mask: "serviceResource.datacenter.name",
    format: |v| fmt_opt(v.datacenter_name()),
};
const STORAGE_TYPE: VolumeColumn = ColumnSpec {
    key: "storage_type",
    header: "storage_type",
    mask: "storageType.keyName",
    format: |v| fmt_opt(v.storage_type_label()),
};
const CAPACITY_GB: VolumeColumn = ColumnSpec {
    key: "capacity_gb",
    header: "capacity_gb",
    mask: "capacityGb",
    format: |v| fmt_opt(v.capacity_gb),
};
const BYTES_USED: VolumeColumn = ColumnSpec {
    key: "bytes_used",
    header: "bytes_used",
    mask: "bytesUsed",
    format: |v| fmt_opt(v.bytes_used.as_deref()),
};
const IOPS: VolumeColumn = ColumnSpec {
    key: "IOPs",
    header: "IOPs",
    mask: "iops",
    format: |v| fmt_opt(v.iops.as_deref()),
};
const IP_ADDR: VolumeColumn = ColumnSpec {
    key: "ip_addr",
    header: "ip_addr",
    mask: "serviceResourceBackendIpAddress",
    format: |v| fmt_opt(v.service_resource_backend_ip_address.as_deref()),
};
const LUN_ID: VolumeColumn = ColumnSpec {
    key: "lunId",
    header: "lunId",
    mask: "lunId",
    format: |v| fmt_opt(v.lun_id.as_deref()),
};
const ACTIVE_TRANSACTIONS: VolumeColumn = ColumnSpec {
    key: "active_transactions",
    header: "active_transactions",
    mask: "activeTransactionCount",
    format: |v| fmt_opt(v.active_transaction_count),
};
const REP_PARTNER_COUNT: VolumeColumn = ColumnSpec {
    key: "rep_partner_count",
    header: "rep_partner_count",
    mask: "replicationPartnerCount",
    format: |v| fmt_opt(v.replication_partner_count),
};
const NOTES: VolumeColumn = ColumnSpec {
    key: "notes",
    header: "notes",
    mask: "notes",
    format: |v| fmt_opt(v.decoded_notes().map(|n| shorten(&n))),
};
const CREATED_BY: VolumeColumn = ColumnSpec {
    key: "created_by",
    header: "created_by",
    mask: "billingItem.orderItem.order.userRecord.username",
    format: |v| fmt_opt(v.created_by()),
};
const MOUNT_ADDR: VolumeColumn = ColumnSpec {
    key: "mount_addr",
    header: "mount_addr",
    mask: "fileNetworkMountAddress",
    format: |v| fmt_opt(v.file_network_mount_address.as_deref()),
};

const BY_ID: VolumeSort = SortKey {
    key: "id",
    less: |a, b| less_opt(a.id.as_ref(), b.id.as_ref()),
};
const BY_USERNAME: VolumeSort = SortKey {
    key: "username",
    less: |a, b| less_opt(a.username.as_deref(), b.username.as_deref()),
};
const BY_DATACENTER: VolumeSort = SortKey {
    key: "datacenter",
    less: |a, b| less_opt(a.datacenter_name(), b.datacenter_name()),
};
const BY_STORAGE_TYPE: VolumeSort = SortKey {
    key: "storage_type",
    less: |a, b| less_opt(a.storage_type_key(), b.storage_type_key()),
};
const BY_CAPACITY_GB: VolumeSort = SortKey {
    key: "capacity_gb",
    less: |a, b| less_opt(a.capacity_gb.as_ref(), b.capacity_gb.as_ref()),
};
// Largest first.
const BY_BYTES_USED: VolumeSort = SortKey {
    key: "bytes_used",
    less: |a, b| greater_opt(a.bytes_used.as_deref(), b.bytes_used.as_deref()),
};
const BY_IP_ADDR: VolumeSort = SortKey {
    key: "ip_addr",
    less: |a, b| {
        less_opt(
            a.service_resource_backend_ip_address.as_deref(),
            b.service_resource_backend_ip_address.as_deref(),
        )
    },
};
const BY_LUN_ID: VolumeSort = SortKey {
    key: "lunId",
    less: |a, b| less_numeric_str(a.lun_id.as_deref(), b.lun_id.as_deref()),
};
const BY_ACTIVE_TRANSACTIONS: VolumeSort = SortKey {
    key: "active_transactions",
    less: |a, b| less_opt(a.active_transaction_count.as_ref(), b.active_transaction_count.as_ref()),
};
const BY_CREATED_BY: VolumeSort = SortKey {
    key: "created_by",
    less: |a, b| less_opt(a.created_by(), b.created_by()),
};
const BY_MOUNT_ADDR: VolumeSort = SortKey {
    key: "mount_addr",
    less: |a, b| {
        less_opt(
            a.file_network_mount_address.as_deref(),
            b.file_network_mount_address.as_deref(),
        )
    },
};

pub static BLOCK_VOLUMES: ColumnRegistry<NetworkStorage> = ColumnRegistry {
    resource: "block volume",
    base_mask: "",
    defaults: &[
        ID,
        USERNAME,
        DATACENTER,
        STORAGE_TYPE,
        CAPACITY_GB,
        BYTES_USED,
        IOPS,
        IP_ADDR,
        LUN_ID,
        ACTIVE_TRANSACTIONS,
        REP_PARTNER_COUNT,
        NOTES,
    ],
    optional: &[CREATED_BY],
    sort_keys: &[
        BY_ID,
        BY_USERNAME,
        BY_DATACENTER,
        BY_STORAGE_TYPE,
        BY_CAPACITY_GB,
        BY_BYTES_USED,
        BY_IP_ADDR,
        BY_LUN_ID,
        BY_ACTIVE_TRANSACTIONS,
        BY_CREATED_BY,
    ],
    default_sort: "id",
};

pub static FILE_VOLUMES: ColumnRegistry<NetworkStorage> = ColumnRegistry {
    resource: "file volume",
    base_mask: "",
    defaults: &[
        ID,
        USERNAME,
        DATACENTER,
        STORAGE_TYPE,
        CAPACITY_GB,
        BYTES_USED,
        IOPS,
        IP_ADDR,
        LUN_ID,
        ACTIVE_TRANSACTIONS,
        REP_PARTNER_COUNT,
        NOTES,
    ],
    optional: &[CREATED_BY, MOUNT_ADDR],
    sort_keys: &[
        BY_ID,
        BY_USERNAME,
        BY_DATACENTER,
        BY_STORAGE_TYPE,
        BY_CAPACITY_GB,
        BY_BYTES_USED,
        BY_IP_ADDR,
        BY_ACTIVE_TRANSACTIONS,
        BY_CREATED_BY,
        BY_MOUNT_ADDR,
    ],
    default_sort: "id",
};

pub static SNAPSHOTS: ColumnRegistry<NetworkStorage> = ColumnRegistry {
    resource: "snapshot",
    base_mask: "",
    defaults: &[
        ID,
        ColumnSpec {
            key: "name",
            header: "name",
            mask: "username",
            format: |s| fmt_opt(s.username.as_deref()),
        },
        ColumnSpec {
            key: "created",
            header: "created",
            mask: "snapshotCreationTimestamp",
            format: |s| fmt_opt(s.snapshot_creation_timestamp.as_deref()),
        },
        ColumnSpec {
            key: "size_bytes",
            header: "size_bytes",
            mask: "snapshotSizeBytes",
            format: |s| fmt_opt(s.snapshot_size_bytes.as_deref()),
        },
    ],
    optional: &[],
    sort_keys: &[
        BY_ID,
        SortKey {
            key: "name",
            less: |a, b| less_opt(a.username.as_deref(), b.username.as_deref()),
        },
        SortKey {
            key: "created",
            less: |a, b| {
                less_opt(
                    a.snapshot_creation_timestamp.as_deref(),
                    b.snapshot_creation_timestamp.as_deref(),
                )
            },
        },
        SortKey {
            key: "size_bytes",
            less: |a, b| less_numeric_str(a.snapshot_size_bytes.as_deref(), b.snapshot_size_bytes.as_deref()),
        },
    ],
    default_sort: "id",
};

/// An entry built without a kind sorts like an absent value
fn access_kind(entry: &AccessEntry) -> Option<&str> {
    Some(entry.kind.as_str()).filter(|kind| !kind.is_empty())
}

/// Access entries are assembled client-side, so no column adds to the mask
pub static ACCESS_LIST: ColumnRegistry<AccessEntry> = ColumnRegistry {
    resource: "access list",
    base_mask: "id,allowedVirtualGuests.allowedHost.credential,allowedHardware.allowedHost.credential,allowedSubnets.allowedHost.credential,allowedIpAddresses.allowedHost.credential",
    defaults: &[
        ColumnSpec {
            key: "id",
            header: "id",
            mask: "",
            format: |a| fmt_opt(a.id),
        },
        ColumnSpec {
            key: "name",
            header: "name",
            mask: "",
            format: |a| fmt_opt(a.name.as_deref()),
        },
        ColumnSpec {
            key: "type",
            header: "type",
            mask: "",
            format: |a| a.kind.clone(),
        },
        ColumnSpec {
            key: "private_ip_address",
            header: "private_ip_address",
            mask: "",
            format: |a| fmt_opt(a.private_ip_address.as_deref()),
        },
        ColumnSpec {
            key: "source_subnet",
            header: "source_subnet",
            mask: "",
            format: |a| fmt_opt(a.source_subnet.as_deref()),
        },
        ColumnSpec {
            key: "host_iqn",
            header: "host_iqn",
            mask: "",
            format: |a| fmt_opt(a.host_iqn.as_deref()),
        },
        ColumnSpec {
            key: "username",
            header: "username",
            mask: "",
            format: |a| fmt_opt(a.username.as_deref()),
        },
        ColumnSpec {
            key: "password",
            header: "password",
            mask: "",
            format: |a| fmt_opt(a.password.as_deref()),
        },
        ColumnSpec {
            key: "allowed_host_id",
            header: "allowed_host_id",
            mask: "",
            format: |a| fmt_opt(a.allowed_host_id),
        },
    ],
    optional: &[],
    sort_keys: &[
        SortKey {
            key: "id",
            less: |a, b| less_opt(a.id.as_ref(), b.id.as_ref()),
        },
        SortKey {
            key: "name",
            less: |a, b| less_opt(a.name.as_deref(), b.name.as_deref()),
        },
        SortKey {
            key: "type",
            less: |a, b| less_opt(access_kind(a), access_kind(b)),
        },
        SortKey {
            key: "private_ip_address",
            less: |a, b| less_opt(a.private_ip_address.as_deref(), b.private_ip_address.as_deref()),
        },
        SortKey {
            key: "source_subnet",
            less: |a, b| less_opt(a.source_subnet.as_deref(), b.source_subnet.as_deref()),
        },
        SortKey {
            key: "host_iqn",
            less: |a, b| less_opt(a.host_iqn.as_deref(), b.host_iqn.as_deref()),
        },
        SortKey {
            key: "username",
            less: |a, b| less_opt(a.username.as_deref(), b.username.as_deref()),
        },
        SortKey {
            key: "password",
            less: |a, b| less_opt(a.password.as_deref(), b.password.as_deref()),
        },
        SortKey {
            key: "allowed_host_id",
            less: |a, b| less_opt(a.allowed_host_id.as_ref(), b.allowed_host_id.as_ref()),
        },
    ],
    default_sort: "allowed_host_id",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ColumnFlag;
    use serde_json::json;

    fn volume(value: serde_json::Value) -> NetworkStorage {
        serde_json::from_value(value).unwrap()
    }

    fn ids(volumes: &[NetworkStorage]) -> Vec<i64> {
        volumes.iter().filter_map(|v| v.id).collect()
    }

    #[test]
    fn test_block_default_mask() {
        let cols = BLOCK_VOLUMES.resolve("id", &[], ColumnFlag::Column).unwrap();
        assert_eq!(
            BLOCK_VOLUMES.mask(&cols, "id"),
            "id,username,serviceResource.datacenter.name,storageType.keyName,capacityGb,bytesUsed,iops,\
serviceResourceBackendIpAddress,lunId,activeTransactionCount,replicationPartnerCount,notes"
        );
    }

    #[test]
    fn test_block_created_by_sort_fetches_relationship() {
        let cols = BLOCK_VOLUMES
            .resolve("created_by", &["id".to_string()], ColumnFlag::Column)
            .unwrap();
        assert_eq!(
            BLOCK_VOLUMES.mask(&cols, "created_by"),
            "id,billingItem.orderItem.order.userRecord.username"
        );
    }

    #[test]
    fn test_file_sorts_by_mount_addr_not_lun_id() {
        assert!(FILE_VOLUMES.comparator("mount_addr").is_some());
        assert!(FILE_VOLUMES.comparator("lunId").is_none());
        assert!(BLOCK_VOLUMES.comparator("lunId").is_some());
        assert!(BLOCK_VOLUMES.column("mount_addr").is_none());
    }

    #[test]
    fn test_lun_id_numeric_fallback() {
        let mut volumes = vec![
            volume(json!({"id": 1, "lunId": "100"})),
            volume(json!({"id": 2, "lunId": "20"})),
        ];
        BLOCK_VOLUMES.sort(&mut volumes, "lunId");
        assert_eq!(ids(&volumes), vec![2, 1]);
    }

    #[test]
    fn test_bytes_used_sorts_descending() {
        let mut volumes = vec![
            volume(json!({"id": 1, "bytesUsed": "100"})),
            volume(json!({"id": 2, "bytesUsed": "300"})),
            volume(json!({"id": 3, "bytesUsed": "200"})),
        ];
        FILE_VOLUMES.sort(&mut volumes, "bytes_used");
        assert_eq!(ids(&volumes), vec![2, 3, 1]);
    }

    #[test]
    fn test_storage_type_and_notes_formatting() {
        let v = volume(json!({
            "storageType": {"keyName": "PERFORMANCE_FILE_STORAGE"},
            "notes": format!("{}+end", "a".repeat(90))
        }));
        assert_eq!((STORAGE_TYPE.format)(&v), "performance_file_storage");
        let notes = (NOTES.format)(&v);
        assert!(notes.ends_with("..."));
        assert_eq!(notes.chars().count(), 83);
        assert_eq!((NOTES.format)(&NetworkStorage::default()), "-");
    }

    #[test]
    fn test_snapshot_size_numeric_fallback() {
        let mut snaps = vec![
            volume(json!({"id": 1, "snapshotSizeBytes": "abc"})),
            volume(json!({"id": 2, "snapshotSizeBytes": "20"})),
        ];
        SNAPSHOTS.sort(&mut snaps, "size_bytes");
        assert_eq!(ids(&snaps), vec![2, 1]);
    }

    #[test]
    fn test_access_list_mask_is_fixed() {
        let cols = ACCESS_LIST
            .resolve("allowed_host_id", &["name".to_string()], ColumnFlag::Column)
            .unwrap();
        assert_eq!(ACCESS_LIST.mask(&cols, "allowed_host_id"), ACCESS_LIST.base_mask);
    }

    #[test]
    fn test_access_list_sorts_by_type() {
        let entry = |kind: &str, id: i64| AccessEntry {
            id: Some(id),
            kind: kind.to_string(),
            ..Default::default()
        };
        let mut entries = vec![entry("VIRTUAL", 1), entry("HARDWARE", 2), entry("IP", 3)];
        ACCESS_LIST.sort(&mut entries, "type");
        let kinds: Vec<_> = entries.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["HARDWARE", "IP", "VIRTUAL"]);
    }
}
