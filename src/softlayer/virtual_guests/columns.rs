//! Virtual server column registry

use super::models::VirtualGuest;
use crate::output::format::{fmt_opt, join_names};
use crate::query::{less_opt, ColumnRegistry, ColumnSpec, SortKey};
use crate::softlayer::models::{created_by, tag_names};

pub static VIRTUAL_GUESTS: ColumnRegistry<VirtualGuest> = ColumnRegistry {
    resource: "virtual server",
    base_mask: "",
    defaults: &[
        ColumnSpec {
            key: "id",
            header: "id",
            mask: "id",
            format: |v| fmt_opt(v.id),
        },
        ColumnSpec {
            key: "hostname",
            header: "hostname",
            mask: "hostname",
            format: |v| fmt_opt(v.hostname.as_deref()),
        },
        ColumnSpec {
            key: "domain",
            header: "domain",
            mask: "domain",
            format: |v| fmt_opt(v.domain.as_deref()),
        },
        ColumnSpec {
            key: "cpu",
            header: "cpu",
            mask: "maxCpu",
            format: |v| fmt_opt(v.max_cpu),
        },
        ColumnSpec {
            key: "memory",
            header: "memory",
            mask: "maxMemory",
            format: |v| fmt_opt(v.max_memory),
        },
        ColumnSpec {
            key: "public_ip",
            header: "public_ip",
            mask: "primaryIpAddress",
            format: |v| fmt_opt(v.primary_ip_address.as_deref()),
        },
        ColumnSpec {
            key: "private_ip",
            header: "private_ip",
            mask: "primaryBackendIpAddress",
            format: |v| fmt_opt(v.primary_backend_ip_address.as_deref()),
        },
        ColumnSpec {
            key: "datacenter",
            header: "datacenter",
            mask: "datacenter.name",
            format: |v| fmt_opt(v.datacenter_name()),
        },
        ColumnSpec {
            key: "action",
            header: "action",
            mask: "activeTransaction.transactionStatus.name",
            format: |v| fmt_opt(v.action()),
        },
    ],
    optional: &[
        ColumnSpec {
            key: "guid",
            header: "guid",
            mask: "globalIdentifier",
            format: |v| fmt_opt(v.global_identifier.as_deref()),
        },
        ColumnSpec {
            key: "power_state",
            header: "power_state",
            mask: "powerState.name",
            format: |v| fmt_opt(v.power_state_name()),
        },
        ColumnSpec {
            key: "created_by",
            header: "created_by",
            mask: "billingItem.orderItem.order.userRecord.username",
            format: |v| fmt_opt(created_by(&v.billing_item)),
        },
        ColumnSpec {
            key: "tags",
            header: "tags",
            mask: "tagReferences.tag.name",
            format: |v| join_names(tag_names(&v.tag_references)),
        },
    ],
    sort_keys: &[
        SortKey {
            key: "id",
            less: |a, b| less_opt(a.id.as_ref(), b.id.as_ref()),
        },
        SortKey {
            key: "hostname",
            less: |a, b| less_opt(a.hostname.as_deref(), b.hostname.as_deref()),
        },
        SortKey {
            key: "domain",
            less: |a, b| less_opt(a.domain.as_deref(), b.domain.as_deref()),
        },
        SortKey {
            key: "cpu",
            less: |a, b| less_opt(a.max_cpu.as_ref(), b.max_cpu.as_ref()),
        },
        SortKey {
            key: "memory",
            less: |a, b| less_opt(a.max_memory.as_ref(), b.max_memory.as_ref()),
        },
        SortKey {
            key: "public_ip",
            less: |a, b| less_opt(a.primary_ip_address.as_deref(), b.primary_ip_address.as_deref()),
        },
        SortKey {
            key: "private_ip",
            less: |a, b| {
                less_opt(
                    a.primary_backend_ip_address.as_deref(),
                    b.primary_backend_ip_address.as_deref(),
                )
            },
        },
        SortKey {
            key: "datacenter",
            less: |a, b| less_opt(a.datacenter_name(), b.datacenter_name()),
        },
    ],
    default_sort: "hostname",
};
