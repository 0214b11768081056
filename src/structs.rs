use crate::http_cache::enums::http_method::HttpMethod;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Check connectivity of one group, or of every configured group.
    Ping { group: Option<String> },
    /// Sweep expired entries of one group, or of every group that supports it.
    Gc { group: Option<String> },
    /// Remove every entry from a group's backend (default group when omitted).
    Clear { group: Option<String> },
    /// Request a URL through the HTTP cache and print the response.
    Fetch {
        url: String,
        #[arg(long, value_enum, ignore_case = true, default_value = "get")]
        method: HttpMethod,
    },
}
