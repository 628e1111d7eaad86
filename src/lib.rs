//! Fetch conference paper lists from DBLP and save them as plain-text files,
//! exposed as MCP tools over stdio.

pub mod cli;
pub mod dblp;
pub mod papers;
pub mod stdio;

pub use dblp::{DblpClient, DblpConfig, DblpError};
pub use papers::{fetch_conference_papers, fetch_papers_from_url, PaperRecord};
pub use stdio::PaperListServer;
