//! User entity CLI - entry point.
//!
//! Loads user records from JSON and runs them through the domain validation.

mod args;
mod commands;

use std::io::Write;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::{Cli, Commands};
use commands::Verdict;
use common::Config;

/// Exit status when a password check does not match
const EXIT_PASSWORD_MISMATCH: i32 = 5;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config);
    let _span = tracing::info_span!("cli", service = %config.service_name).entered();
    tracing::debug!(?config, "Configuration loaded");

    let mut stdout = std::io::stdout().lock();

    // Execute command
    let result = match cli.command {
        Commands::Validate(args) => commands::validate(args, &mut stdout).map(|_| 0),
        Commands::Verify(args) => commands::verify(args, &mut stdout).map(|verdict| match verdict {
            Verdict::Valid => 0,
            Verdict::Invalid => EXIT_PASSWORD_MISMATCH,
        }),
    };

    stdout.flush().ok();

    // Handle errors
    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
            std::process::exit(e.exit_code());
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, config: &Config) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
