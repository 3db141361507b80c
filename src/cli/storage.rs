//! Block and file storage command definitions

use clap::{Args, Subcommand};

use super::common::{DetailArgs, SelectArgs};

/// Storage commands, shared by `block` and `file`
#[derive(Subcommand, Debug)]
pub enum StorageCommand {
    /// List volumes
    VolumeList(VolumeListArgs),

    /// Show details of a volume
    VolumeDetail(DetailArgs),

    /// List snapshots of a volume
    SnapshotList(VolumeItemsArgs),

    /// List hosts authorized to access a volume
    AccessList(VolumeItemsArgs),
}

/// Arguments for 'volume-list'
#[derive(Args, Debug, Clone)]
pub struct VolumeListArgs {
    /// Column to sort by
    #[arg(long)]
    pub sortby: Option<String>,

    /// Filter by datacenter shortname
    #[arg(short = 'd', long)]
    pub datacenter: Option<String>,

    /// Filter by volume username
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Filter by storage type: performance or endurance
    #[arg(short = 't', long = "storage-type")]
    pub storage_type: Option<String>,

    #[command(flatten)]
    pub select: SelectArgs,
}

/// Arguments for listings that belong to one volume
#[derive(Args, Debug, Clone)]
pub struct VolumeItemsArgs {
    /// Volume ID
    pub id: String,

    /// Column to sort by
    #[arg(long)]
    pub sortby: Option<String>,

    #[command(flatten)]
    pub select: SelectArgs,
}
