//! SoftLayer API client module
//!
//! This module provides the REST transport and one submodule per listed
//! resource type.

mod client;
mod credentials;
mod filter;
pub mod hardware;
pub mod models;
pub mod security_groups;
pub mod storage;
pub mod subnets;
pub mod users;
pub mod virtual_guests;

pub use client::{ApiRequest, SlClient};
pub use credentials::{CredentialResolver, Credentials};
pub use filter::{query_op, ObjectFilter};
pub use hardware::{run_hardware_command, Hardware, HARDWARE};
pub use security_groups::{
    run_security_group_command, SecurityGroup, SecurityGroupRule, INTERFACES, RULES,
    SECURITY_GROUPS,
};
pub use storage::{
    run_storage_command, NetworkStorage, VolumeKind, ACCESS_LIST, BLOCK_VOLUMES, FILE_VOLUMES,
    SNAPSHOTS,
};
pub use subnets::{run_subnet_command, Subnet, SUBNETS};
pub use users::{run_user_command, User, USERS};
pub use virtual_guests::{run_vs_command, VirtualGuest, VIRTUAL_GUESTS};

use crate::query::ColumnPool;

/// Every list registry, for checks that span resource types
pub fn registries() -> Vec<&'static dyn ColumnPool> {
    let pools: [&'static dyn ColumnPool; 11] = [
        &HARDWARE,
        &VIRTUAL_GUESTS,
        &BLOCK_VOLUMES,
        &FILE_VOLUMES,
        &SNAPSHOTS,
        &ACCESS_LIST,
        &SUBNETS,
        &SECURITY_GROUPS,
        &RULES,
        &INTERFACES,
        &USERS,
    ];
    pools.to_vec()
}
