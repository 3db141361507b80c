//! slctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use slctl::{
    run_hardware_command, run_security_group_command, run_storage_command, run_subnet_command,
    run_user_command, run_vs_command, Cli, Command, CredentialResolver, Result, SlClient,
    VolumeKind,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting slctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("Command: {:?}", cli.command);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Resolved on the first call, after the command has checked its input
    let client = SlClient::deferred(
        CredentialResolver::new(),
        cli.api_username.as_deref(),
        cli.api_key.as_deref(),
        cli.endpoint.as_deref(),
    );
    let quiet = cli.quiet;

    match &cli.command {
        Command::Hardware(cmd) => run_hardware_command(&client, cmd, quiet).await,
        Command::Vs(cmd) => run_vs_command(&client, cmd, quiet).await,
        Command::Block(cmd) => run_storage_command(&client, VolumeKind::Block, cmd, quiet).await,
        Command::File(cmd) => run_storage_command(&client, VolumeKind::File, cmd, quiet).await,
        Command::Subnet(cmd) => run_subnet_command(&client, cmd, quiet).await,
        Command::Securitygroup(cmd) => run_security_group_command(&client, cmd, quiet).await,
        Command::User(cmd) => run_user_command(&client, cmd, quiet).await,
    }
}
