use clap::Parser;
use std::time::Duration;

use crate::dblp::{DblpConfig, DEFAULT_API_URL, DEFAULT_MAX_HITS};

/// DBLP paper-list MCP server
///
/// Serves two tools over stdio:
/// - `get_conference_paper_list`: papers of a conference series and year
/// - `get_paper_list_from_url`: papers of a ready-made DBLP search URL
#[derive(Parser, Debug)]
#[command(name = "dblp-paper-list")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// DBLP publication search endpoint
    /// Can also be set via `DBLP_API_URL` environment variable
    #[arg(long, value_name = "URL", env = "DBLP_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Maximum number of hits requested per query (default: 1000)
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_HITS)]
    pub max_hits: u32,

    /// HTTP request timeout in seconds (default: none)
    /// Can also be set via `DBLP_HTTP_TIMEOUT_SECS` environment variable
    #[arg(long, value_name = "SECONDS", env = "DBLP_HTTP_TIMEOUT_SECS")]
    pub http_timeout: Option<u64>,

    /// List available tool names and exit
    #[arg(long)]
    pub list_tools: bool,
}

impl Cli {
    /// Build the DBLP client configuration from CLI flags
    pub fn dblp_config(&self) -> DblpConfig {
        DblpConfig {
            api_url: self.api_url.clone(),
            max_hits: self.max_hits,
            timeout: self.http_timeout.map(Duration::from_secs),
        }
    }
}
