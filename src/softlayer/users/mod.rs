//! Users module - list portal users on the account

mod api;
mod columns;
mod commands;
mod models;

pub use columns::USERS;
pub use commands::{list_users, run_user_command};
pub use models::{User, UserStatus};
