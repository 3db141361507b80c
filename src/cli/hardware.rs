//! Bare-metal server and virtual server command definitions

use clap::{Args, Subcommand};

use super::common::SelectArgs;

/// Bare-metal server commands
#[derive(Subcommand, Debug)]
pub enum HardwareCommand {
    /// List hardware servers
    List(ServerListArgs),
}

/// Virtual server commands
#[derive(Subcommand, Debug)]
pub enum VsCommand {
    /// List virtual server instances
    List(ServerListArgs),
}

/// Arguments for 'hardware list' and 'vs list'
#[derive(Args, Debug, Clone)]
pub struct ServerListArgs {
    /// Column to sort by
    #[arg(long)]
    pub sortby: Option<String>,

    /// Filter by datacenter shortname
    #[arg(short = 'd', long)]
    pub datacenter: Option<String>,

    /// Filter by hostname (supports * wildcards)
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,

    /// Filter by domain (supports * wildcards)
    #[arg(short = 'D', long)]
    pub domain: Option<String>,

    #[command(flatten)]
    pub select: SelectArgs,
}
