//! Typed tool arguments. Their JSON Schemas are what `tools/list` advertises.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_save_path() -> String {
    "./".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConferencePaperListArgs {
    /// The name of the conference series (e.g., "ICDE").
    pub conference_series: String,

    /// The year of the conference (e.g., "2024").
    pub year: String,

    /// Directory to save the results in. Defaults to the current directory.
    #[serde(default = "default_save_path")]
    pub save_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UrlPaperListArgs {
    /// DBLP search API URL returning JSON
    /// (e.g., "https://dblp.org/search/publ/api?q=toc:db/journals/pvldb/pvldb17.bht:&h=1000&format=json").
    pub json_url: String,

    /// Directory to save the results in. Defaults to the current directory.
    #[serde(default = "default_save_path")]
    pub save_path: String,
}
