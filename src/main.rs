//! Warren - recipient trust management for hierarchical encrypted secret stores.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use warren::cli::output;
use warren::cli::{execute, Cli};
use warren::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("WARREN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("warren=debug")
        } else {
            EnvFilter::new("warren=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        if matches!(e, Error::UserAborted) {
            // A cancelled prompt is an outcome, not an error.
            output::dimmed("aborted");
        } else {
            output::error(&e.to_string());
            if let Some(hint) = suggestion(&e) {
                output::hint(hint);
            }
        }
        std::process::exit(e.exit_code());
    }
}

/// Follow-up command suggestion for recoverable failures.
fn suggestion(e: &Error) -> Option<&'static str> {
    if e.is_drift() {
        return Some("run: warren recipients update");
    }
    match e {
        Error::NoKeyMutated(_) => {
            Some("check the key references, or pass --force to trust them as-is")
        }
        Error::StoreNotFound(_) => Some("run: warren recipients show"),
        _ => None,
    }
}
