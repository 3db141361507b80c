//! Virtual server command handlers

use log::{debug, info};

use super::columns::VIRTUAL_GUESTS;
use crate::cli::{ServerListArgs, VsCommand};
use crate::error::{Result, SlError};
use crate::softlayer::{ObjectFilter, SlClient};
use crate::ui::{clear_spinner, create_spinner};

const LIST_FAILED: &str = "Failed to list virtual server instances on your account.";

/// Run a virtual server subcommand
pub async fn run_vs_command(client: &SlClient, command: &VsCommand, quiet: bool) -> Result<()> {
    match command {
        VsCommand::List(args) => {
            let output = list_virtual_guests(client, args, quiet).await?;
            println!("{}", output);
        }
    }
    Ok(())
}

/// List virtual servers and render them
pub async fn list_virtual_guests(
    client: &SlClient,
    args: &ServerListArgs,
    quiet: bool,
) -> Result<String> {
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = VIRTUAL_GUESTS.plan(&query)?;

    let filter = ObjectFilter::new()
        .matching("virtualGuests.hostname", args.hostname.as_deref())
        .matching("virtualGuests.domain", args.domain.as_deref())
        .matching("virtualGuests.datacenter.name", args.datacenter.as_deref());
    debug!("Virtual guest filter: {:?}", filter.build());

    let spinner = create_spinner("Fetching virtual servers...", quiet);
    let result = client.get_virtual_guests(&plan.mask, filter.build()).await;
    clear_spinner(spinner);

    let guests = result.map_err(|e| SlError::upstream(LIST_FAILED, e))?;
    info!("Found {} virtual servers", guests.len());
    plan.present(guests)
}
