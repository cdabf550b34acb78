//! CLI command definitions for the `tarkarli` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Tarkarli travel assistant chat relay.
#[derive(Parser)]
#[command(name = "tarkarli", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat relay HTTP server.
    Serve {
        /// Port to listen on (overrides config and TARKARLI_PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config and TARKARLI_HOST).
        #[arg(long)]
        host: Option<String>,

        /// Export tracing spans through OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },

    /// Ask the travel assistant a single question from the terminal.
    Ask {
        /// The question to send.
        message: String,

        /// Where the traveller is right now (e.g. "Pune").
        #[arg(short, long)]
        location: Option<String>,

        /// Print the HTTP response body as JSON instead of styled text.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
