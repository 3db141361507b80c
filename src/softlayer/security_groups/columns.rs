//! Security group, rule and interface column registries

use super::models::{GroupInterface, SecurityGroup, SecurityGroupRule};
use crate::output::format::{fmt_opt, fmt_time};
use crate::query::{less_opt, ColumnRegistry, ColumnSpec, SortKey};

pub static SECURITY_GROUPS: ColumnRegistry<SecurityGroup> = ColumnRegistry {
    resource: "security group",
    base_mask: "",
    defaults: &[
        ColumnSpec {
            key: "id",
            header: "id",
            mask: "id",
            format: |g| fmt_opt(g.id),
        },
        ColumnSpec {
            key: "name",
            header: "name",
            mask: "name",
            format: |g| fmt_opt(g.name.as_deref()),
        },
        ColumnSpec {
            key: "description",
            header: "description",
            mask: "description",
            format: |g| fmt_opt(g.description.as_deref()),
        },
        ColumnSpec {
            key: "created",
            header: "created",
            mask: "createDate",
            format: |g| fmt_time(g.create_date.as_ref()),
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
            key: "description",
            less: |a, b| less_opt(a.description.as_deref(), b.description.as_deref()),
        },
        SortKey {
            key: "created",
            less: |a, b| less_opt(a.create_date.as_ref(), b.create_date.as_ref()),
        },
    ],
    default_sort: "id",
};

pub static RULES: ColumnRegistry<SecurityGroupRule> = ColumnRegistry {
    resource: "security group rule",
    base_mask: "",
    defaults: &[
        ColumnSpec {
            key: "id",
            header: "ID",
            mask: "id",
            format: |r| fmt_opt(r.id),
        },
        ColumnSpec {
            key: "remoteIp",
            header: "Remote IP",
            mask: "remoteIp",
            format: |r| fmt_opt(r.remote_ip.as_deref()),
        },
        ColumnSpec {
            key: "remoteGroupId",
            header: "Remote Group ID",
            mask: "remoteGroupId",
            format: |r| fmt_opt(r.remote_group_id),
        },
        ColumnSpec {
            key: "direction",
            header: "Direction",
            mask: "direction",
            format: |r| fmt_opt(r.direction.as_deref()),
        },
        ColumnSpec {
            key: "ethertype",
            header: "Ether Type",
            mask: "ethertype",
            format: |r| fmt_opt(r.ethertype.as_deref()),
        },
        ColumnSpec {
            key: "portRangeMin",
            header: "Port Range Min",
            mask: "portRangeMin",
            format: |r| fmt_opt(r.port_range_min),
        },
        ColumnSpec {
            key: "portRangeMax",
            header: "Port Range Max",
            mask: "portRangeMax",
            format: |r| fmt_opt(r.port_range_max),
        },
        ColumnSpec {
            key: "protocol",
            header: "Protocol",
            mask: "protocol",
            format: |r| fmt_opt(r.protocol.as_deref()),
        },
    ],
    optional: &[],
    sort_keys: &[
        SortKey {
            key: "id",
            less: |a, b| less_opt(a.id.as_ref(), b.id.as_ref()),
        },
        SortKey {
            key: "remoteIp",
            less: |a, b| less_opt(a.remote_ip.as_deref(), b.remote_ip.as_deref()),
        },
        SortKey {
            key: "remoteGroupId",
            less: |a, b| less_opt(a.remote_group_id.as_ref(), b.remote_group_id.as_ref()),
        },
        SortKey {
            key: "direction",
            less: |a, b| less_opt(a.direction.as_deref(), b.direction.as_deref()),
        },
        SortKey {
            key: "ethertype",
            less: |a, b| less_opt(a.ethertype.as_deref(), b.ethertype.as_deref()),
        },
        SortKey {
            key: "portRangeMin",
            less: |a, b| less_opt(a.port_range_min.as_ref(), b.port_range_min.as_ref()),
        },
        SortKey {
            key: "portRangeMax",
            less: |a, b| less_opt(a.port_range_max.as_ref(), b.port_range_max.as_ref()),
        },
        SortKey {
            key: "protocol",
            less: |a, b| less_opt(a.protocol.as_deref(), b.protocol.as_deref()),
        },
    ],
    default_sort: "id",
};

/// Interfaces are derived from bindings, so columns add nothing to the mask
pub static INTERFACES: ColumnRegistry<GroupInterface> = ColumnRegistry {
    resource: "security group interface",
    base_mask: "networkComponent[id,port,guest[id,hostname,primaryBackendIpAddress,primaryIpAddress]]",
    defaults: &[
        ColumnSpec {
            key: "id",
            header: "id",
            mask: "",
            format: |i| fmt_opt(i.id),
        },
        ColumnSpec {
            key: "virtualServerId",
            header: "virtualServerId",
            mask: "",
            format: |i| fmt_opt(i.virtual_server_id),
        },
        ColumnSpec {
            key: "hostname",
            header: "hostname",
            mask: "",
            format: |i| fmt_opt(i.hostname.as_deref()),
        },
        ColumnSpec {
            key: "interface",
            header: "interface",
            mask: "",
            format: |i| i.interface.clone(),
        },
        ColumnSpec {
            key: "ipAddress",
            header: "ipAddress",
            mask: "",
            format: |i| fmt_opt(i.ip_address.as_deref()),
        },
    ],
    optional: &[],
    sort_keys: &[
        SortKey {
            key: "id",
            less: |a, b| less_opt(a.id.as_ref(), b.id.as_ref()),
        },
        SortKey {
            key: "virtualServerId",
            less: |a, b| less_opt(a.virtual_server_id.as_ref(), b.virtual_server_id.as_ref()),
        },
        SortKey {
            key: "hostname",
            less: |a, b| less_opt(a.hostname.as_deref(), b.hostname.as_deref()),
        },
    ],
    default_sort: "id",
};
