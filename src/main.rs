//! # nsot
//!
//! `nsot` is a command-line client for the Network Source of Truth, an
//! inventory of sites, networks, devices and interfaces.
//!
//! ## Usage
//!
//! ```sh
//! nsot interfaces list -s 1 -D 5 -n eth0
//! nsot networks add -s 1 -c 10.0.0.0/24 -a owner=ops
//! nsot changes list -s 1 -e create
//! ```
//!
//! The API URL and a default site may be stored in `~/.nsotrc.yaml`.
//! See `nsot --help` for all options.

use clap::Parser as _;
use nsot_cli::cli::Args;
use nsot_cli::error::NsotError;
use nsot_cli::system::real::RealSystem;
use std::io::IsTerminal as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match nsot_cli::run(&args, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<NsotError>()
                    .map_or(1, NsotError::exit_code),
            );
        }
    }
}
