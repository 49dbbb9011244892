//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Convert Anthropic Messages requests into Kiro payloads
#[derive(Parser)]
#[command(name = "kiro-bridge", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for AI and machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a Messages request into a Kiro payload
    Convert {
        /// Request file; `-` or omitted reads stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Conversation ID (default: a fresh UUID)
        #[arg(long)]
        conversation_id: Option<String>,
        /// Profile ARN. Uses PROFILE_ARN env if not set.
        #[arg(long)]
        profile_arn: Option<String>,
        /// Print the payload on one line
        #[arg(long)]
        compact: bool,
    },
    /// Show the model alias table
    Models {
        /// Resolve a single model name instead of listing
        #[arg(long)]
        resolve: Option<String>,
    },
    /// Summarize what a request converts into, message by message
    Inspect {
        /// Request file; `-` or omitted reads stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
