//! Courier - fetch and sync Postman collections and environments.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use courier::cli::output;
use courier::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("COURIER_LOG").unwrap_or_else(|_| {
        if cli.global.verbose {
            EnvFilter::new("courier=debug")
        } else {
            EnvFilter::new("courier=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        tracing::debug!(kind = %e.kind(), "command failed");
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
