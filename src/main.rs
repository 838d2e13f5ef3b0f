use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use linkvault::cli::Cli;
use linkvault::config::{get_config, init_config};
use linkvault::interfaces::cli::run_cli_command;
use linkvault::system::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_config(cli.config.as_deref());
    let config = get_config();

    // guard 必须存活到进程结束，否则缓冲的日志会丢失
    let _log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!(
        "Using {} as user {}",
        config.database.database_url, config.user.id
    );

    if let Err(e) = run_cli_command(cli.command).await {
        eprintln!("{}", e.format_colored());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
