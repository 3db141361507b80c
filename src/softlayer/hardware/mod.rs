//! Hardware module - list bare-metal servers on the account

mod api;
mod columns;
mod commands;
mod models;

pub use columns::HARDWARE;
pub use commands::{list_hardware, run_hardware_command};
pub use models::{Hardware, HardwareStatus, OperatingSystem};
