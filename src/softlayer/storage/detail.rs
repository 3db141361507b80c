//! Volume detail table

use super::models::NetworkStorage;
use super::VolumeKind;
use crate::output::format::{fmt_opt, EMPTY_VALUE};
use crate::output::Table;

/// IOPS per GB for each endurance tier
fn tier_per_iops(tier: &str) -> Option<f64> {
    match tier {
        "LOW_INTENSITY_TIER" => Some(0.25),
        "READHEAVY_TIER" => Some(2.0),
        "WRITEHEAVY_TIER" => Some(4.0),
        "10_IOPS_PER_GB" => Some(10.0),
        _ => None,
    }
}

fn format_tier_per_iops(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn replicants_table(partners: &[NetworkStorage]) -> Table {
    let mut table = Table::new(["", ""]);
    for partner in partners {
        table.add_pair("Replicant ID", fmt_opt(partner.id));
        table.add_pair("Volume Name", fmt_opt(partner.username.as_deref()));
        table.add_pair(
            "Target IP",
            fmt_opt(partner.service_resource_backend_ip_address.as_deref()),
        );
        if let Some(datacenter) = partner.datacenter_name() {
            table.add_pair("Datacenter", datacenter);
        }
        if let Some(schedule) = partner.schedule_keyname() {
            table.add_pair("Schedule", schedule);
        }
    }
    table
}

fn duplicate_table(volume: &NetworkStorage) -> Table {
    let mut table = Table::new(["", ""]);
    table.add_pair("Original Volume Name", fmt_opt(volume.original_volume_name.as_deref()));
    table.add_pair("Original Volume Size", fmt_opt(volume.original_volume_size.as_deref()));
    table.add_pair(
        "Original Snapshot Name",
        fmt_opt(volume.original_snapshot_name.as_deref()),
    );
    table
}

/// Name/value table describing one volume
pub fn volume_table(volume: &NetworkStorage, kind: VolumeKind) -> Table {
    let mut table = Table::new(["Name", "Value"]);
    table.add_pair("ID", fmt_opt(volume.id));
    table.add_pair("User name", fmt_opt(volume.username.as_deref()));
    table.add_pair("Type", fmt_opt(volume.storage_type_label()));
    table.add_pair("Capacity (GB)", fmt_opt(volume.capacity_gb));
    table.add_pair("LUN Id", fmt_opt(volume.lun_id.as_deref()));

    if let Some(iops) = &volume.iops {
        table.add_pair("IOPs", iops.as_str());
    }
    if let Some(tier) = &volume.storage_tier_level {
        table.add_pair("Endurance Tier", tier.as_str());
        let per_iops = tier_per_iops(tier).map(format_tier_per_iops);
        table.add_pair("Endurance Tier Per IOPS", fmt_opt(per_iops));
    }

    if let Some(datacenter) = volume.datacenter_name() {
        table.add_pair("Datacenter", datacenter);
    }
    table.add_pair(
        "Target IP",
        fmt_opt(volume.service_resource_backend_ip_address.as_deref()),
    );
    if kind == VolumeKind::File {
        table.add_pair(
            "Mount Address",
            fmt_opt(volume.file_network_mount_address.as_deref()),
        );
    }

    if let Some(capacity) = &volume.snapshot_capacity_gb {
        table.add_pair("Snapshot Size (GB)", capacity.as_str());
        if let Some(parent) = &volume.parent_volume {
            table.add_pair(
                "Snapshot Used (Bytes)",
                fmt_opt(parent.snapshot_size_bytes.as_deref()),
            );
        }
    }

    table.add_pair("# of Active Transactions", fmt_opt(volume.active_transaction_count));
    for name in volume.transaction_names() {
        table.add_pair("Ongoing Transactions", name);
    }

    table.add_pair("Replicant Count", fmt_opt(volume.replication_partner_count));
    if volume.replication_partner_count.unwrap_or(0) > 0 {
        table.add_pair("Replication Status", fmt_opt(volume.replication_status.as_deref()));
        let partners = volume.replication_partners.as_deref().unwrap_or_default();
        table.add_pair("Replicant Volumes", replicants_table(partners));
    }

    if volume.original_volume_size.is_some() {
        table.add_pair("Duplicate Volume Properties", duplicate_table(volume));
    }

    table.add_pair(
        "Notes",
        volume.decoded_notes().unwrap_or_else(|| EMPTY_VALUE.to_string()),
    );
    let encrypted = if volume.has_encryption_at_rest == Some(true) {
        "True"
    } else {
        "False"
    };
    table.add_pair("Encrypted", encrypted);
    table
}
