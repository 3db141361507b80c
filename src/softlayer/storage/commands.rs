//! Storage command handlers

use log::{debug, info};

use super::access::access_entries;
use super::columns::{ACCESS_LIST, SNAPSHOTS};
use super::detail::volume_table;
use super::VolumeKind;
use crate::cli::{parse_id, DetailArgs, StorageCommand, VolumeItemsArgs, VolumeListArgs};
use crate::error::{Result, SlError};
use crate::output::render;
use crate::softlayer::{ObjectFilter, SlClient};
use crate::ui::{clear_spinner, create_spinner};

const LIST_FAILED: &str = "Failed to list volumes on your account.";
const SNAPSHOTS_FAILED: &str = "Failed to get snapshot list on your account.";

/// Run a block or file storage subcommand
pub async fn run_storage_command(
    client: &SlClient,
    kind: VolumeKind,
    command: &StorageCommand,
    quiet: bool,
) -> Result<()> {
    let output = match command {
        StorageCommand::VolumeList(args) => list_volumes(client, kind, args, quiet).await?,
        StorageCommand::VolumeDetail(args) => show_volume(client, kind, args, quiet).await?,
        StorageCommand::SnapshotList(args) => list_snapshots(client, args, quiet).await?,
        StorageCommand::AccessList(args) => list_access(client, args, quiet).await?,
    };
    println!("{}", output);
    Ok(())
}

/// Account filter selecting volumes of one family
fn volume_filter(kind: VolumeKind, args: &VolumeListArgs) -> ObjectFilter {
    let root = kind.filter_root();
    let path = |field: &str| format!("{}.{}", root, field);
    let storage_type = args
        .storage_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase);

    let filter = match kind {
        VolumeKind::Block => {
            let filter = ObjectFilter::new().with(&path("storageType.keyName"), "!= ISCSI");
            match &storage_type {
                Some(t) => filter.with(&path("storageType.keyName"), format!("{}_BLOCK_STORAGE", t)),
                None => filter.with(&path("storageType.keyName"), "~ BLOCK_STORAGE"),
            }
        }
        VolumeKind::File => {
            let filter = ObjectFilter::new()
                .with(&path("serviceResource.type.type"), "!= *NAS")
                .with(&path("storageType.keyName"), "~ FILE_STORAGE");
            match &storage_type {
                Some(t) => filter.with(&path("storageType.keyName"), format!("{}_FILE_STORAGE", t)),
                None => filter,
            }
        }
    };
    filter
        .equals(&path("serviceResource.datacenter.name"), args.datacenter.as_deref())
        .equals(&path("username"), args.username.as_deref())
}

/// List block or file volumes
pub async fn list_volumes(
    client: &SlClient,
    kind: VolumeKind,
    args: &VolumeListArgs,
    quiet: bool,
) -> Result<String> {
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = kind.registry().plan(&query)?;

    let filter = volume_filter(kind, args);
    debug!("{} volume filter: {:?}", kind, filter.build());

    let spinner = create_spinner(&format!("Fetching {} volumes...", kind), quiet);
    let result = client.get_volumes(kind, &plan.mask, filter.build()).await;
    clear_spinner(spinner);

    let volumes = result.map_err(|e| SlError::upstream(LIST_FAILED, e))?;
    info!("Found {} {} volumes", volumes.len(), kind);
    plan.present(volumes)
}

/// Show one volume as a name/value table or JSON
pub async fn show_volume(
    client: &SlClient,
    kind: VolumeKind,
    args: &DetailArgs,
    quiet: bool,
) -> Result<String> {
    let id = parse_id("Volume ID", &args.id)?;
    let format = args.format()?;

    let spinner = create_spinner(&format!("Fetching volume {}...", id), quiet);
    let result = client.get_volume(id, kind.detail_mask()).await;
    clear_spinner(spinner);

    let volume = result.map_err(|e| {
        SlError::upstream(format!("Failed to get details of volume {}.", id), e)
    })?;
    render(&volume, &volume_table(&volume, kind), format)
}

/// List snapshots of a volume
pub async fn list_snapshots(client: &SlClient, args: &VolumeItemsArgs, quiet: bool) -> Result<String> {
    let id = parse_id("Volume ID", &args.id)?;
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = SNAPSHOTS.plan(&query)?;

    let spinner = create_spinner(&format!("Fetching snapshots of volume {}...", id), quiet);
    let result = client.get_snapshots(id, &plan.mask).await;
    clear_spinner(spinner);

    let snapshots = result.map_err(|e| SlError::upstream(SNAPSHOTS_FAILED, e))?;
    info!("Found {} snapshots of volume {}", snapshots.len(), id);
    plan.present(snapshots)
}

/// List hosts authorized to access a volume
pub async fn list_access(client: &SlClient, args: &VolumeItemsArgs, quiet: bool) -> Result<String> {
    let id = parse_id("Volume ID", &args.id)?;
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = ACCESS_LIST.plan(&query)?;

    let spinner = create_spinner(&format!("Fetching access list of volume {}...", id), quiet);
    let result = client.get_volume(id, &plan.mask).await;
    clear_spinner(spinner);

    let volume = result.map_err(|e| {
        SlError::upstream(format!("Failed to get access list for volume {}.", id), e)
    })?;
    let entries = access_entries(&volume);
    info!("Found {} access entries for volume {}", entries.len(), id);
    plan.present(entries)
}
