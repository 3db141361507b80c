//! Virtual guests module - list virtual server instances on the account

mod api;
mod columns;
mod commands;
mod models;

pub use columns::VIRTUAL_GUESTS;
pub use commands::{list_virtual_guests, run_vs_command};
pub use models::{PowerState, VirtualGuest};
