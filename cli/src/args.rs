//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Validate and inspect user account records
#[derive(Parser, Debug)]
#[command(name = "user-entity")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a user record and print it without the password
    Validate(ValidateArgs),

    /// Check a candidate password against a user record
    Verify(VerifyArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// JSON file holding the user record ("-" reads stdin)
    pub file: PathBuf,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// JSON file holding the user record ("-" reads stdin)
    pub file: PathBuf,

    /// Password to check
    #[arg(short, long, env = "USER_PASSWORD", hide_env_values = true)]
    pub password: String,
}
