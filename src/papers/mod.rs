//! Paper lists: extraction from search hits, fetch procedures and file output.

pub mod fetch;
pub mod record;
pub mod writer;

pub use fetch::{bundle_name_from_url, fetch_conference_papers, fetch_papers_from_url, TocProbe};
pub use record::{PaperRecord, UNKNOWN_AUTHOR, UNKNOWN_TITLE, UNKNOWN_URL};
pub use writer::{write_bundle, BundlePaths};
