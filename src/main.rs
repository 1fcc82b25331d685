mod cli;
mod config;
mod format;
mod krdict;
mod paginate;

pub const USER_AGENT: &str = concat!("krdict/", env!("CARGO_PKG_VERSION"));

/// Log filter applied on top of `RUST_LOG`. Logs go to stderr; stdout only
/// carries rendered output.
const DEFAULT_LOG_DIRECTIVE: &str = "krdict=info";

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .init();

    let cli = Cli::parse();
    info!(command = ?cli.command, "starting krdict");

    match cli::run(cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
