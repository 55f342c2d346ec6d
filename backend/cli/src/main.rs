mod check_cmd;
mod pipeline;

use clap::{Parser, Subcommand};
use tracing::error;

use julesbridge_core::Outcome;

#[derive(Parser)]
#[command(name = "julesbridge")]
#[command(about = "JulesBridge — posts Jules session summaries onto GitHub pull requests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the notifier pipeline once (the default)
    Run,
    /// Validate configuration without touching the network
    Check,
}

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => match pipeline::run().await {
            Ok(Outcome::Posted | Outcome::NotATarget) => {}
            Err(err) => {
                error!("{err}");
                std::process::exit(1);
            }
        },
        Commands::Check => {
            if !check_cmd::run() {
                std::process::exit(1);
            }
        }
    }
}
