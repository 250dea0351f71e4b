//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "haldef")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Resolve target-product compiler defines for native build targets")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print the compiler defines for a target product, one per line
    Resolve {
        /// Target product identifier (falls back to TARGET_PRODUCT / config file)
        product: Option<String>,

        /// Optional TOML build-environment file
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Print the defaults-properties record as JSON for a property merge
    Props {
        /// Target product identifier (falls back to TARGET_PRODUCT / config file)
        product: Option<String>,

        /// Optional TOML build-environment file
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}
