//! Subnets module - list subnets and show one subnet's details

mod api;
mod columns;
mod commands;
mod detail;
mod models;

pub use columns::SUBNETS;
pub use commands::{list_subnets, run_subnet_command, show_subnet};
pub use detail::{detail_mask, subnet_table, DetailSections};
pub use models::{NetworkVlan, Subnet, SubnetHost, SubnetIpAddress};
