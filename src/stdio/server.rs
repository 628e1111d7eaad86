use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
        Tool,
    },
    service::RequestContext,
    transport::stdio,
};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use super::args::{ConferencePaperListArgs, UrlPaperListArgs};
use super::metadata::{all_tool_metadata, CONFERENCE_PAPER_LIST, URL_PAPER_LIST};
use crate::dblp::{DblpClient, DblpError};
use crate::papers::{fetch_conference_papers, fetch_papers_from_url};

/// MCP server exposing the DBLP paper-list tools over stdio
#[derive(Debug, Clone)]
pub struct PaperListServer {
    client: DblpClient,
}

impl PaperListServer {
    pub fn new(client: DblpClient) -> Self {
        Self { client }
    }

    /// Serve the stdio transport until the client disconnects or `shutdown_token` fires
    pub async fn serve_stdio(self, shutdown_token: CancellationToken) -> Result<()> {
        log::info!("Starting stdio server");

        let service = self.serve(stdio()).await.inspect_err(|e| {
            log::error!("serving error: {e:?}");
        })?;

        let service_token = service.cancellation_token();
        tokio::spawn(async move {
            shutdown_token.cancelled().await;
            log::debug!("Shutdown requested, stopping stdio service");
            service_token.cancel();
        });

        let reason = service.waiting().await?;
        log::info!("Stdio server stopped: {reason:?}");
        Ok(())
    }

    /// Run a tool by name with raw JSON arguments.
    pub async fn dispatch(
        &self,
        tool_name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        match tool_name {
            CONFERENCE_PAPER_LIST => {
                let args: ConferencePaperListArgs = parse_args(tool_name, arguments)?;
                log::info!(
                    "Fetching {} {} into {}",
                    args.conference_series,
                    args.year,
                    args.save_path
                );
                let message = fetch_conference_papers(
                    &self.client,
                    &args.conference_series,
                    &args.year,
                    Path::new(&args.save_path),
                )
                .await
                .map_err(|e| tool_error(tool_name, e))?;
                Ok(CallToolResult::success(vec![Content::text(message)]))
            }
            URL_PAPER_LIST => {
                let args: UrlPaperListArgs = parse_args(tool_name, arguments)?;
                log::info!("Fetching {} into {}", args.json_url, args.save_path);
                let message =
                    fetch_papers_from_url(&self.client, &args.json_url, Path::new(&args.save_path))
                        .await
                        .map_err(|e| tool_error(tool_name, e))?;
                Ok(CallToolResult::success(vec![Content::text(message)]))
            }
            _ => Err(McpError::invalid_params(
                format!("Unknown tool: {tool_name}"),
                None,
            )),
        }
    }
}

fn tool_error(tool_name: &str, error: DblpError) -> McpError {
    if error.is_remote() {
        log::warn!("{tool_name}: DBLP API failure: {error}");
    } else {
        log::error!("{tool_name}: could not save results: {error}");
    }
    McpError::internal_error(error.to_string(), None)
}

fn parse_args<T: DeserializeOwned>(tool_name: &str, arguments: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(serde_json::Value::Object(arguments)).map_err(|e| {
        McpError::invalid_params(format!("Invalid arguments for '{tool_name}': {e}"), None)
    })
}

impl ServerHandler for PaperListServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "dblp-conference-paper-list - fetch conference paper lists from DBLP and save them as text files".to_string(),
            ),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        self.dispatch(&request.name, arguments).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = all_tool_metadata()
            .into_iter()
            .map(|tool_meta| {
                let schema_obj = match tool_meta.schema {
                    serde_json::Value::Object(obj) => std::sync::Arc::new(obj),
                    _ => std::sync::Arc::new(serde_json::Map::new()),
                };
                Tool {
                    name: tool_meta.name.into(),
                    title: None,
                    description: Some(tool_meta.description.into()),
                    input_schema: schema_obj,
                    output_schema: None,
                    annotations: None,
                    icons: None,
                    meta: None,
                }
            })
            .collect::<Vec<_>>();

        log::debug!("Serving {} tools", tools.len());
        Ok(ListToolsResult::with_all_items(tools))
    }
}
