//! Account user command definitions

use clap::{Args, Subcommand};

use super::common::SelectArgs;

/// User commands
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List users on the account
    List(UserListArgs),
}

/// Arguments for 'user list'
#[derive(Args, Debug, Clone)]
pub struct UserListArgs {
    #[command(flatten)]
    pub select: SelectArgs,
}
