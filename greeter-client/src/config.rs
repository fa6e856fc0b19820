//! Process configuration, parsed once at startup and passed around by
//! reference afterwards.

use clap::Parser;
use std::path::PathBuf;

/// The name sent when no positional argument is given.
pub const DEFAULT_NAME: &str = "world";

/// Command line configuration for a single client run.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// host:port of the greeter server.
    #[arg(long, default_value = "localhost:50051")]
    pub address: String,

    /// Path to the TLS certificate trusted for the connection.
    /// Ignored when --insecure is set.
    #[arg(long, default_value = "/data/cert.pem")]
    pub cert: PathBuf,

    /// Number of unary requests to send.
    #[arg(long, default_value_t = 9)]
    pub repeat: u32,

    /// Connect without TLS.
    #[arg(long)]
    pub insecure: bool,

    /// Name to greet.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

impl Config {
    /// The name every request of this run carries: the positional argument
    /// if one was given, [`DEFAULT_NAME`] otherwise.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }
}
