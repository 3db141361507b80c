//! Subnet command handlers

use log::{debug, info};

use super::columns::SUBNETS;
use super::detail::{detail_mask, subnet_table, DetailSections};
use crate::cli::{parse_id, SubnetCommand, SubnetDetailArgs, SubnetListArgs};
use crate::error::{Result, SlError};
use crate::output::render;
use crate::softlayer::{ObjectFilter, SlClient};
use crate::ui::{clear_spinner, create_spinner};

const LIST_FAILED: &str = "Failed to list subnets on your account.";

/// Run a subnet subcommand
pub async fn run_subnet_command(client: &SlClient, command: &SubnetCommand, quiet: bool) -> Result<()> {
    let output = match command {
        SubnetCommand::List(args) => list_subnets(client, args, quiet).await?,
        SubnetCommand::Detail(args) => show_subnet(client, args, quiet).await?,
    };
    println!("{}", output);
    Ok(())
}

fn subnet_filter(args: &SubnetListArgs) -> ObjectFilter {
    let filter = ObjectFilter::new()
        .equals("subnets.networkIdentifier", args.identifier.as_deref())
        .equals("subnets.datacenter.name", args.datacenter.as_deref())
        .equals("subnets.networkVlan.networkSpace", args.network_space.as_deref());

    let filter = if args.v4 {
        filter.with("subnets.version", 4)
    } else if args.v6 {
        filter.with("subnets.version", 6)
    } else {
        filter
    };

    match args.subnet_type.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(subnet_type) => filter.with("subnets.subnetType", subnet_type),
        None => filter.with("subnets.subnetType", "!= GLOBAL_IP"),
    }
}

/// List subnets on the account
pub async fn list_subnets(client: &SlClient, args: &SubnetListArgs, quiet: bool) -> Result<String> {
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = SUBNETS.plan(&query)?;

    let filter = subnet_filter(args);
    debug!("Subnet filter: {:?}", filter.build());

    let spinner = create_spinner("Fetching subnets...", quiet);
    let result = client.get_subnets(&plan.mask, filter.build()).await;
    clear_spinner(spinner);

    let subnets = result.map_err(|e| SlError::upstream(LIST_FAILED, e))?;
    info!("Found {} subnets", subnets.len());
    plan.present(subnets)
}

/// Show one subnet with its addresses, servers and tags
pub async fn show_subnet(client: &SlClient, args: &SubnetDetailArgs, quiet: bool) -> Result<String> {
    let format = args.detail.format()?;
    let id = parse_id("Subnet ID", &args.detail.id)?;
    let sections = DetailSections {
        ip_addresses: !args.no_ip,
        virtual_guests: !args.no_vs,
        hardware: !args.no_hardware,
        tags: !args.no_tags,
    };

    let spinner = create_spinner(&format!("Fetching subnet {}...", id), quiet);
    let result = client.get_subnet(id, &detail_mask(sections)).await;
    clear_spinner(spinner);

    let subnet = result.map_err(|e| SlError::upstream(format!("Failed to get subnet: {}.", id), e))?;
    render(&subnet, &subnet_table(&subnet, sections), format)
}
