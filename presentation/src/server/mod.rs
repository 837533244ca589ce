//! MCP server over stdio
//!
//! Tools are not declared with rmcp's macros: the catalog comes from the
//! [`ToolRegistry`](sefaria_application::ToolRegistry) at runtime, so
//! `tools/list` and `tools/call` are implemented by hand on top of the
//! dispatcher.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, ServiceExt};
use sefaria_application::{InvokeToolUseCase, ToolSchemaPort};
use sefaria_domain::tool::value_objects::ToolResult;
use serde_json::Value;
use tracing::info;

const INSTRUCTIONS: &str = "Access to the Sefaria library of Jewish texts. Use get_name to \
     validate references before get_text, search_texts or search_in_book to find passages, \
     get_links for commentaries, and get_situational_info for today's calendar.";

/// MCP front end for the library tools
#[derive(Clone)]
pub struct SefariaServer {
    invoke: InvokeToolUseCase,
    schema: Arc<dyn ToolSchemaPort>,
}

impl SefariaServer {
    pub fn new(invoke: InvokeToolUseCase, schema: Arc<dyn ToolSchemaPort>) -> Self {
        Self { invoke, schema }
    }

    /// MCP tool descriptors, in catalog order
    pub fn tools(&self) -> Vec<Tool> {
        self.invoke
            .registry()
            .spec()
            .all()
            .map(|definition| {
                let schema = match self.schema.input_schema(definition) {
                    Value::Object(map) => map,
                    _ => JsonObject::new(),
                };
                Tool::new(
                    definition.name.clone(),
                    definition.description.clone(),
                    Arc::new(schema),
                )
            })
            .collect()
    }

    /// Run one call through the dispatcher
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let result = self.invoke.invoke(name, arguments.unwrap_or_default()).await;
        to_call_result(result)
    }

    /// Serve on stdin/stdout until the client disconnects
    pub async fn serve_stdio(self) -> Result<(), McpError> {
        info!(tools = self.invoke.registry().available_tools().len(), "Serving MCP on stdio");
        let running = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        running
            .waiting()
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(())
    }
}

/// Error envelopes are flagged as tool errors; their text is unchanged.
fn to_call_result(result: ToolResult) -> CallToolResult {
    let is_error = result.is_error();
    let content = vec![Content::text(result.text)];
    if is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

impl ServerHandler for SefariaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sefaria-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.call(&request.name, request.arguments).await)
    }
}
