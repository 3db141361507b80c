//! Hardware column registry

use super::models::Hardware;
use crate::output::format::{fmt_opt, fmt_time, join_names};
use crate::query::{less_opt, ColumnRegistry, ColumnSpec, SortKey};
use crate::softlayer::models::{created_by, tag_names};

pub static HARDWARE: ColumnRegistry<Hardware> = ColumnRegistry {
    resource: "hardware",
    base_mask: "",
    defaults: &[
        ColumnSpec {
            key: "id",
            header: "id",
            mask: "id",
            format: |h| fmt_opt(h.id),
        },
        ColumnSpec {
            key: "hostname",
            header: "hostname",
            mask: "hostname",
            format: |h| fmt_opt(h.hostname.as_deref()),
        },
        ColumnSpec {
            key: "domain",
            header: "domain",
            mask: "domain",
            format: |h| fmt_opt(h.domain.as_deref()),
        },
        ColumnSpec {
            key: "public_ip",
            header: "public_ip",
            mask: "primaryIpAddress",
            format: |h| fmt_opt(h.primary_ip_address.as_deref()),
        },
        ColumnSpec {
            key: "private_ip",
            header: "private_ip",
            mask: "primaryBackendIpAddress",
            format: |h| fmt_opt(h.primary_backend_ip_address.as_deref()),
        },
        ColumnSpec {
            key: "datacenter",
            header: "datacenter",
            mask: "datacenter.name",
            format: |h| fmt_opt(h.datacenter_name()),
        },
        ColumnSpec {
            key: "status",
            header: "status",
            mask: "hardwareStatus.status",
            format: |h| fmt_opt(h.status()),
        },
    ],
    optional: &[
        ColumnSpec {
            key: "guid",
            header: "guid",
            mask: "globalIdentifier",
            format: |h| fmt_opt(h.global_identifier.as_deref()),
        },
        ColumnSpec {
            key: "cpu",
            header: "cpu",
            mask: "processorPhysicalCoreAmount",
            format: |h| fmt_opt(h.processor_physical_core_amount),
        },
        ColumnSpec {
            key: "memory",
            header: "memory",
            mask: "memoryCapacity",
            format: |h| fmt_opt(h.memory_capacity),
        },
        ColumnSpec {
            key: "os",
            header: "os",
            mask: "operatingSystem.softwareLicense.softwareDescription.name",
            format: |h| fmt_opt(h.os_name()),
        },
        ColumnSpec {
            key: "ipmi_ip",
            header: "ipmi_ip",
            mask: "networkManagementIpAddress",
            format: |h| fmt_opt(h.network_management_ip_address.as_deref()),
        },
        ColumnSpec {
            key: "created",
            header: "created",
            mask: "provisionDate",
            format: |h| fmt_time(h.provision_date.as_ref()),
        },
        ColumnSpec {
            key: "created_by",
            header: "created_by",
            mask: "billingItem.orderItem.order.userRecord.username",
            format: |h| fmt_opt(created_by(&h.billing_item)),
        },
        ColumnSpec {
            key: "tags",
            header: "tags",
            mask: "tagReferences.tag.name",
            format: |h| join_names(tag_names(&h.tag_references)),
        },
    ],
    sort_keys: &[
        SortKey {
            key: "id",
            less: |a, b| less_opt(a.id.as_ref(), b.id.as_ref()),
        },
        SortKey {
            key: "guid",
            less: |a, b| less_opt(a.global_identifier.as_deref(), b.global_identifier.as_deref()),
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
            key: "cpu",
            less: |a, b| {
                less_opt(
                    a.processor_physical_core_amount.as_ref(),
                    b.processor_physical_core_amount.as_ref(),
                )
            },
        },
        SortKey {
            key: "memory",
            less: |a, b| less_opt(a.memory_capacity.as_ref(), b.memory_capacity.as_ref()),
        },
        SortKey {
            key: "os",
            less: |a, b| less_opt(a.os_name(), b.os_name()),
        },
        SortKey {
            key: "datacenter",
            less: |a, b| less_opt(a.datacenter_name(), b.datacenter_name()),
        },
        SortKey {
            key: "status",
            less: |a, b| less_opt(a.status(), b.status()),
        },
        SortKey {
            key: "ipmi_ip",
            less: |a, b| {
                less_opt(
                    a.network_management_ip_address.as_deref(),
                    b.network_management_ip_address.as_deref(),
                )
            },
        },
        SortKey {
            key: "created",
            less: |a, b| less_opt(a.provision_date.as_ref(), b.provision_date.as_ref()),
        },
        SortKey {
            key: "created_by",
            less: |a, b| less_opt(created_by(&a.billing_item), created_by(&b.billing_item)),
        },
    ],
    default_sort: "hostname",
};
