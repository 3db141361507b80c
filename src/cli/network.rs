//! Subnet and security group command definitions

use clap::{Args, Subcommand};

use super::common::{DetailArgs, SelectArgs};

/// Subnet commands
#[derive(Subcommand, Debug)]
pub enum SubnetCommand {
    /// List subnets on the account
    List(SubnetListArgs),

    /// Show details of a subnet
    Detail(SubnetDetailArgs),
}

/// Arguments for 'subnet list'
#[derive(Args, Debug, Clone)]
pub struct SubnetListArgs {
    /// Column to sort by
    #[arg(long)]
    pub sortby: Option<String>,

    /// Filter by datacenter shortname
    #[arg(short = 'd', long)]
    pub datacenter: Option<String>,

    /// Filter by network identifier
    #[arg(long)]
    pub identifier: Option<String>,

    /// Filter by subnet type
    #[arg(short = 't', long = "subnet-type")]
    pub subnet_type: Option<String>,

    /// Filter by network space
    #[arg(long = "network-space")]
    pub network_space: Option<String>,

    /// Display IPv4 subnets only
    #[arg(long = "v4", alias = "ipv4", conflicts_with = "v6")]
    pub v4: bool,

    /// Display IPv6 subnets only
    #[arg(long = "v6", alias = "ipv6")]
    pub v6: bool,

    #[command(flatten)]
    pub select: SelectArgs,
}

/// Arguments for 'subnet detail'
#[derive(Args, Debug, Clone)]
pub struct SubnetDetailArgs {
    #[command(flatten)]
    pub detail: DetailArgs,

    /// Hide IP address information
    #[arg(long = "no-ip")]
    pub no_ip: bool,

    /// Hide virtual server information
    #[arg(long = "no-vs")]
    pub no_vs: bool,

    /// Hide hardware information
    #[arg(long = "no-hardware")]
    pub no_hardware: bool,

    /// Hide tag information
    #[arg(long = "no-tags")]
    pub no_tags: bool,
}

/// Security group commands
#[derive(Subcommand, Debug)]
pub enum SecurityGroupCommand {
    /// List security groups
    List(GroupListArgs),

    /// Show details of a security group
    Detail(DetailArgs),

    /// List rules of a security group
    RuleList(GroupItemsArgs),

    /// List interfaces attached to a security group
    InterfaceList(GroupItemsArgs),
}

/// Arguments for 'securitygroup list'
#[derive(Args, Debug, Clone)]
pub struct GroupListArgs {
    /// Column to sort by
    #[arg(long)]
    pub sortby: Option<String>,

    #[command(flatten)]
    pub select: SelectArgs,
}

/// Arguments for listings that belong to one security group
#[derive(Args, Debug, Clone)]
pub struct GroupItemsArgs {
    /// Security group ID
    pub id: String,

    /// Column to sort by
    #[arg(long)]
    pub sortby: Option<String>,

    #[command(flatten)]
    pub select: SelectArgs,
}
