#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stdout, clippy::print_stderr)]

//! # haldef
//!
//! A thin adapter between the build pipeline and the flag resolver: it
//! sources the target product (argument, else `TARGET_PRODUCT` / config
//! file) and emits either raw compiler defines or a JSON defaults record
//! for the host build system's property merge.

mod args;

use crate::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;
use haldef_flags::source::load_build_env;
use haldef_flags::{DefaultsProperties, resolve};
use haldef_logger::{LevelFilter, Logger};
use std::path::Path;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _logger = Logger::builder("haldef").console(true).level(level).init()?;

    match cli.command {
        AppCommands::Resolve { product, config } => {
            let product = effective_product(product, config.as_deref())?;
            debug!("Resolving cflags for target product '{product}'");
            for flag in &resolve(&product) {
                println!("{flag}");
            }
        },
        AppCommands::Props { product, config } => {
            let product = effective_product(product, config.as_deref())?;
            let props = DefaultsProperties::for_product(&product);
            println!("{}", serde_json::to_string(&props)?);
        },
    }

    Ok(())
}

/// An explicit argument wins; otherwise the product comes from the layered
/// build environment.
fn effective_product(arg: Option<String>, config: Option<&Path>) -> Result<String> {
    match arg {
        Some(product) => Ok(product),
        None => Ok(load_build_env(config)?.target_product),
    }
}
