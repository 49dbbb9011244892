//! CLI entry point for kiro-bridge.

mod cli;
mod commands;
mod output;

use clap::Parser;
use kirobridge_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Load the nearest project `.env`, walking up from the working directory.
fn load_env_file() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            break;
        }
        if !dir.pop() {
            break;
        }
    }
}

fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env().with_version(env!("CARGO_PKG_VERSION"));
    if verbose {
        config = config.with_log_level("debug");
    } else if config.log_level.is_none() {
        config = config.with_log_level("warn");
    }
    if let Err(e) = kirobridge_observability::init(config) {
        output::warning(&e.to_string());
    }
}

fn main() {
    load_env_file();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
