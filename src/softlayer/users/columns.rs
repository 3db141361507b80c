//! User column registry; users are listed in transport order

use super::models::User;
use crate::output::format::{fmt_opt, yes_if_positive};
use crate::query::{ColumnRegistry, ColumnSpec};

pub static USERS: ColumnRegistry<User> = ColumnRegistry {
    resource: "user",
    base_mask: "",
    defaults: &[
        ColumnSpec {
            key: "id",
            header: "id",
            mask: "id",
            format: |u| fmt_opt(u.id),
        },
        ColumnSpec {
            key: "username",
            header: "username",
            mask: "username",
            format: |u| fmt_opt(u.username.as_deref()),
        },
        ColumnSpec {
            key: "email",
            header: "email",
            mask: "email",
            format: |u| fmt_opt(u.email.as_deref()),
        },
        ColumnSpec {
            key: "displayName",
            header: "displayName",
            mask: "displayName",
            format: |u| fmt_opt(u.display_name.as_deref()),
        },
        ColumnSpec {
            key: "2FA",
            header: "2FA",
            mask: "externalBindingCount",
            format: |u| yes_if_positive(u.external_binding_count),
        },
        ColumnSpec {
            key: "classicAPIKey",
            header: "classicAPIKey",
            mask: "apiAuthenticationKeyCount",
            format: |u| yes_if_positive(u.api_authentication_key_count),
        },
    ],
    optional: &[
        ColumnSpec {
            key: "status",
            header: "status",
            mask: "userStatus.name",
            format: |u| fmt_opt(u.status()),
        },
        ColumnSpec {
            key: "hardwareCount",
            header: "hardwareCount",
            mask: "hardwareCount",
            format: |u| fmt_opt(u.hardware_count),
        },
        ColumnSpec {
            key: "virtualGuestCount",
            header: "virtualGuestCount",
            mask: "virtualGuestCount",
            format: |u| fmt_opt(u.virtual_guest_count),
        },
    ],
    sort_keys: &[],
    default_sort: "",
};
