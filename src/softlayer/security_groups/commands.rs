//! Security group command handlers

use log::info;

use super::columns::{INTERFACES, RULES, SECURITY_GROUPS};
use super::detail::{group_table, DETAIL_MASK};
use super::models::interfaces;
use crate::cli::{parse_id, DetailArgs, GroupItemsArgs, GroupListArgs, SecurityGroupCommand};
use crate::error::{Result, SlError};
use crate::output::render;
use crate::softlayer::SlClient;
use crate::ui::{clear_spinner, create_spinner};

const LIST_FAILED: &str = "Failed to list security groups on your account.";

/// Run a security group subcommand
pub async fn run_security_group_command(
    client: &SlClient,
    command: &SecurityGroupCommand,
    quiet: bool,
) -> Result<()> {
    let output = match command {
        SecurityGroupCommand::List(args) => list_security_groups(client, args, quiet).await?,
        SecurityGroupCommand::Detail(args) => show_security_group(client, args, quiet).await?,
        SecurityGroupCommand::RuleList(args) => list_rules(client, args, quiet).await?,
        SecurityGroupCommand::InterfaceList(args) => list_interfaces(client, args, quiet).await?,
    };
    println!("{}", output);
    Ok(())
}

/// List security groups
pub async fn list_security_groups(client: &SlClient, args: &GroupListArgs, quiet: bool) -> Result<String> {
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = SECURITY_GROUPS.plan(&query)?;

    let spinner = create_spinner("Fetching security groups...", quiet);
    let result = client.get_security_groups(&plan.mask).await;
    clear_spinner(spinner);

    let groups = result.map_err(|e| SlError::upstream(LIST_FAILED, e))?;
    info!("Found {} security groups", groups.len());
    plan.present(groups)
}

/// Show one security group with its rules and servers
pub async fn show_security_group(client: &SlClient, args: &DetailArgs, quiet: bool) -> Result<String> {
    let id = parse_id("Security group ID", &args.id)?;
    let format = args.format()?;

    let spinner = create_spinner(&format!("Fetching security group {}...", id), quiet);
    let result = client.get_security_group(id, DETAIL_MASK).await;
    clear_spinner(spinner);

    let group = result.map_err(|e| SlError::upstream(format!("Failed to get security group {}.", id), e))?;
    render(&group, &group_table(&group), format)
}

/// List the rules of a security group
pub async fn list_rules(client: &SlClient, args: &GroupItemsArgs, quiet: bool) -> Result<String> {
    let id = parse_id("Security group ID", &args.id)?;
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = RULES.plan(&query)?;

    let spinner = create_spinner(&format!("Fetching rules of security group {}...", id), quiet);
    let result = client.get_security_group_rules(id, &plan.mask).await;
    clear_spinner(spinner);

    let rules = result.map_err(|e| {
        SlError::upstream(format!("Failed to get rules of security group {}.", id), e)
    })?;
    info!("Found {} rules in security group {}", rules.len(), id);
    plan.present(rules)
}

/// List the virtual server interfaces bound to a security group
pub async fn list_interfaces(client: &SlClient, args: &GroupItemsArgs, quiet: bool) -> Result<String> {
    let id = parse_id("Security group ID", &args.id)?;
    let query = args.select.query(args.sortby.as_deref())?;
    let plan = INTERFACES.plan(&query)?;

    let spinner = create_spinner(&format!("Fetching interfaces of security group {}...", id), quiet);
    let result = client.get_security_group_bindings(id, &plan.mask).await;
    clear_spinner(spinner);

    let bindings = result.map_err(|e| {
        SlError::upstream(format!("Failed to get interfaces of security group {}.", id), e)
    })?;
    let found = interfaces(&bindings);
    info!("Found {} interfaces in security group {}", found.len(), id);
    plan.present(found)
}
