// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod commands;
mod config;
mod logging;
mod paths;

use clap::Parser;

use crate::cli::Args;

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(paths::default_log_path);

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // logging should never block normal usage
        eprintln!("paintkit: failed to init logging: {e}");
    }

    if let Err(e) = commands::run(args) {
        eventline::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
