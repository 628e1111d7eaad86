//! DBLP search API access.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DblpClient, DblpConfig, DEFAULT_API_URL, DEFAULT_MAX_HITS};
pub use error::DblpError;
pub use types::{Author, Authors, Hit, Info, SearchPage, SearchResponse};
