use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{PositionClient, DEFAULT_SERVER_URL};
use shared::domain::PositionUpdate;
use tokio::io::BufReader;

mod commands;
mod session;
mod view;

#[derive(Parser, Debug)]
#[command(about = "Antenna position controller")]
struct Cli {
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server_url: String,
    /// Per-request timeout in milliseconds; 0 waits indefinitely.
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current position.
    Get,
    /// Send a (possibly partial) position, then print the refreshed one.
    Set {
        #[arg(long, allow_hyphen_values = true)]
        azimuth: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        elevation: Option<i64>,
    },
    /// Edit pending values and send them from an operator prompt.
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    tracing::debug!(server_url = %cli.server_url, "controller starting");

    let timeout = (cli.timeout_ms > 0).then(|| Duration::from_millis(cli.timeout_ms));
    let mut client = PositionClient::connect(&cli.server_url, timeout)?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Get => {
            let current = client
                .refresh_current()
                .await
                .context("failed to read current position")?;
            println!("{}", serde_json::to_string(&current)?);
        }
        Command::Set { azimuth, elevation } => {
            let update = PositionUpdate { azimuth, elevation };
            if update.is_empty() {
                anyhow::bail!("nothing to send; pass --azimuth and/or --elevation");
            }
            let current = client
                .send_and_refresh(update)
                .await
                .context("failed to set position")?;
            println!("{}", serde_json::to_string(&current)?);
        }
        Command::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run_session(&mut client, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}

