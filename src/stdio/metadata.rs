//! Static tool metadata served by `tools/list`.

use schemars::{schema_for, JsonSchema};
use serde_json::Value;

use super::args::{ConferencePaperListArgs, UrlPaperListArgs};

pub const CONFERENCE_PAPER_LIST: &str = "get_conference_paper_list";
pub const URL_PAPER_LIST: &str = "get_paper_list_from_url";

/// Metadata for a single tool.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub schema: Value,
}

/// Helper to build schema from Args type.
fn build_schema<T: JsonSchema>() -> Value {
    serde_json::to_value(schema_for!(T)).unwrap_or(Value::Null)
}

/// Both tools with static metadata.
pub fn all_tool_metadata() -> Vec<ToolMetadata> {
    vec![
        ToolMetadata {
            name: CONFERENCE_PAPER_LIST,
            description: "Get conference paper list from DBLP. Queries the proceedings of the given conference series and year (following -1, -2, ... parts when the proceedings are split) and saves titles, titles with authors, and titles with links as text files in '{save_path}/{series}_{year}'.",
            schema: build_schema::<ConferencePaperListArgs>(),
        },
        ToolMetadata {
            name: URL_PAPER_LIST,
            description: "Get paper list from a DBLP search API URL. Fetches the URL once and saves titles, titles with authors, and titles with links as text files in a directory named after the last path segment of the URL.",
            schema: build_schema::<UrlPaperListArgs>(),
        },
    ]
}

/// Get all available tool names
pub fn available_tools() -> Vec<&'static str> {
    all_tool_metadata().iter().map(|tool| tool.name).collect()
}
