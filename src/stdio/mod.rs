pub mod args;
pub mod metadata;
pub mod server;

pub use metadata::{all_tool_metadata, available_tools, ToolMetadata};
pub use server::PaperListServer;
