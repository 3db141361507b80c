//! Security groups module - groups, their rules and attached interfaces

mod api;
mod columns;
mod commands;
mod detail;
mod models;

pub use columns::{INTERFACES, RULES, SECURITY_GROUPS};
pub use commands::{
    list_interfaces, list_rules, list_security_groups, run_security_group_command,
    show_security_group,
};
pub use detail::group_table;
pub use models::{
    interfaces, GroupInterface, NetworkComponent, NetworkComponentBinding, SecurityGroup,
    SecurityGroupRule,
};
