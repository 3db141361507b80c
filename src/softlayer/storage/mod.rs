//! Storage module - block and file volumes, snapshots and access lists

mod access;
mod api;
mod columns;
mod commands;
mod detail;
mod models;

use std::fmt;

pub use access::access_entries;
pub use columns::{ACCESS_LIST, BLOCK_VOLUMES, FILE_VOLUMES, SNAPSHOTS};
pub use commands::{
    list_access, list_snapshots, list_volumes, run_storage_command, show_volume,
};
pub use detail::volume_table;
pub use models::{AccessEntry, NetworkStorage};

use crate::query::ColumnRegistry;

/// Storage family a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind {
    Block,
    File,
}

impl VolumeKind {
    /// Account method listing volumes of this family
    pub fn list_method(self) -> &'static str {
        match self {
            VolumeKind::Block => "getIscsiNetworkStorage",
            VolumeKind::File => "getNasNetworkStorage",
        }
    }

    /// Root property name used in account filters
    pub fn filter_root(self) -> &'static str {
        match self {
            VolumeKind::Block => "iscsiNetworkStorage",
            VolumeKind::File => "nasNetworkStorage",
        }
    }

    pub fn registry(self) -> &'static ColumnRegistry<NetworkStorage> {
        match self {
            VolumeKind::Block => &BLOCK_VOLUMES,
            VolumeKind::File => &FILE_VOLUMES,
        }
    }

    /// Fields fetched for `volume-detail`
    pub fn detail_mask(self) -> &'static str {
        match self {
            VolumeKind::Block => BLOCK_DETAIL_MASK,
            VolumeKind::File => FILE_DETAIL_MASK,
        }
    }
}

impl fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeKind::Block => write!(f, "block"),
            VolumeKind::File => write!(f, "file"),
        }
    }
}

const BLOCK_DETAIL_MASK: &str = "id,username,password,capacityGb,snapshotCapacityGb,\
parentVolume.snapshotSizeBytes,storageType.keyName,serviceResource.datacenter.name,\
serviceResourceBackendIpAddress,storageTierLevel,iops,lunId,originalVolumeName,\
originalSnapshotName,originalVolumeSize,activeTransactionCount,\
activeTransactions.transactionStatus.friendlyName,replicationPartnerCount,replicationStatus,\
replicationPartners[id,username,serviceResourceBackendIpAddress,serviceResource.datacenter.name,\
replicationSchedule.type.keyname],notes,hasEncryptionAtRest";

const FILE_DETAIL_MASK: &str = "id,username,password,capacityGb,bytesUsed,snapshotCapacityGb,\
parentVolume.snapshotSizeBytes,storageType.keyName,serviceResource.datacenter.name,\
serviceResourceBackendIpAddress,fileNetworkMountAddress,storageTierLevel,iops,lunId,\
originalVolumeName,originalSnapshotName,originalVolumeSize,activeTransactionCount,\
activeTransactions.transactionStatus.friendlyName,replicationPartnerCount,replicationStatus,\
replicationPartners[id,username,serviceResourceBackendIpAddress,serviceResource.datacenter.name,\
replicationSchedule.type.keyname],notes,hasEncryptionAtRest";
