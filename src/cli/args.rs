//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// lanwarden - VPN bypass investigation from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subcommand to execute (none opens the watch dashboard)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one investigation pass and print the verdict
    Investigate {
        /// Emit the full investigation as JSON
        #[arg(long)]
        json: bool,
        /// Probe targets (host or host:port), overriding config.toml
        #[arg(short, long)]
        target: Vec<String>,
    },
    /// Issue a security-gated HTTP request (audited)
    Request {
        /// Target URL
        url: String,
        /// HTTP method
        #[arg(short, long, default_value = "get")]
        method: String,
        /// Request body
        #[arg(long)]
        body: Option<String>,
        /// Bypass the security gate for this request
        #[arg(long)]
        bypass: bool,
        /// Emergency access justification; always proceeds and is audited
        #[arg(long)]
        emergency: Option<String>,
    },
    /// Render the security report
    Report,
    /// Print recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = crate::constants::AUDIT_TAIL_LEN)]
        limit: usize,
    },
}
