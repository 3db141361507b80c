//! CLI argument parsing

mod common;
mod hardware;
mod network;
mod storage;
mod users;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{parse_id, DetailArgs, SelectArgs};
pub use hardware::{HardwareCommand, ServerListArgs, VsCommand};
pub use network::{
    GroupItemsArgs, GroupListArgs, SecurityGroupCommand, SubnetCommand, SubnetDetailArgs,
    SubnetListArgs,
};
pub use storage::{StorageCommand, VolumeItemsArgs, VolumeListArgs};
pub use users::{UserCommand, UserListArgs};

/// SoftLayer resource lister
#[derive(Parser, Debug)]
#[command(name = "slctl")]
#[command(version)]
#[command(about = "List and inspect SoftLayer classic infrastructure resources", long_about = None)]
pub struct Cli {
    /// API username (overrides SL_USERNAME and ~/.softlayer)
    #[arg(long = "api-username", global = true)]
    pub api_username: Option<String>,

    /// API key (overrides SL_API_KEY and ~/.softlayer)
    #[arg(long = "api-key", global = true)]
    pub api_key: Option<String>,

    /// REST endpoint URL (overrides SL_ENDPOINT_URL and ~/.softlayer)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Suppress the progress spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Resource families
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bare-metal servers
    #[command(subcommand, visible_alias = "hw")]
    Hardware(HardwareCommand),

    /// Virtual server instances
    #[command(subcommand)]
    Vs(VsCommand),

    /// Block storage volumes
    #[command(subcommand)]
    Block(StorageCommand),

    /// File storage volumes
    #[command(subcommand)]
    File(StorageCommand),

    /// Subnets
    #[command(subcommand)]
    Subnet(SubnetCommand),

    /// Security groups
    #[command(subcommand, visible_alias = "sg")]
    Securitygroup(SecurityGroupCommand),

    /// Account users
    #[command(subcommand)]
    User(UserCommand),
}
