//! Command dispatch.

pub mod convert;
pub mod inspect;
pub mod models;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use kiro_bridge::{BridgeConfig, MessagesRequest};

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    let config = BridgeConfig::from_env().context("Failed to load configuration")?;

    match cli.command {
        Command::Convert {
            input,
            conversation_id,
            profile_arn,
            compact,
        } => convert::handle(
            &config,
            input.as_deref(),
            conversation_id,
            profile_arn,
            compact,
        ),
        Command::Models { resolve } => models::handle(&config, resolve.as_deref()),
        Command::Inspect { input } => inspect::handle(&config, input.as_deref()),
    }
}

/// Read and parse a Messages request from a file, or stdin for `-`/`None`.
pub fn read_request(input: Option<&Path>) -> Result<MessagesRequest> {
    let raw = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Request is not a valid Messages API body")
}
