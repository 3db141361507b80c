//! Hardware command handlers

use log::{debug, info};

use super::columns::HARDWARE;
use crate::cli::{HardwareCommand, ServerListArgs};
use crate::error::{Result, SlError};
use crate::softlayer::{ObjectFilter, SlClient};
use crate::ui::{clear_spinner, create_spinner};

const LIST_FAILED: &str = "Failed to get hardware servers on your account.";

/// Run a hardware subcommand
pub async fn run_hardware_command(
    client: &SlClient,
    command: &HardwareCommand,
    quiet: bool,
) -> Result<()> {
    match command {
        HardwareCommand::List(args) => {
            let output = list_hardware(client, args, quiet).await?;
            println!("{}", output);
        }
    }
    Ok(())
}

/// List bare-metal servers and render them
pub async fn list_hardware(client: &SlClient, args: &ServerListArgs, quiet: bool) -> Result<String> {
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = HARDWARE.plan(&query)?;

    let filter = ObjectFilter::new()
        .matching("hardware.hostname", args.hostname.as_deref())
        .matching("hardware.domain", args.domain.as_deref())
        .matching("hardware.datacenter.name", args.datacenter.as_deref());
    debug!("Hardware filter: {:?}", filter.build());

    let spinner = create_spinner("Fetching hardware servers...", quiet);
    let result = client.get_hardware(&plan.mask, filter.build()).await;
    clear_spinner(spinner);

    let servers = result.map_err(|e| SlError::upstream(LIST_FAILED, e))?;
    info!("Found {} hardware servers", servers.len());
    plan.present(servers)
}
