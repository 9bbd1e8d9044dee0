//! MCP server exposing the quick-search session.

use crate::config::QuickSearchConfig;
use crate::search::SearchIndex;
use crate::session::SearchSession;
use crate::tools::event::{SendEventRequest, handle_send_event};
use crate::tools::search::{SearchRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::borrow::Cow;
use std::sync::Arc;

/// MCP server for quick-search lookups over one loaded index
#[derive(Clone)]
pub struct QuickSearchServer {
    /// Shared session state (index, ranker, navigation controller)
    state: Arc<SearchSession>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for QuickSearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickSearchServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl QuickSearchServer {
    pub fn new(index: Arc<SearchIndex>, config: QuickSearchConfig) -> Self {
        Self {
            state: Arc::new(SearchSession::new(index, config)),
            tool_router: Self::tool_router(),
        }
    }

    pub fn session(&self) -> &Arc<SearchSession> {
        &self.state
    }

    #[tool(
        description = "Rank every name in the index against a query by bigram similarity and return the best matches, highest score first. At most 10 results are shown unless a limit is given; a trailing note marks truncated lists.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        description = "Send one input event (key code, row hover/click, document click, focus change) to the quick-search box. Returns the render effects, any navigation intents, and the resulting selection state as JSON.",
        input_schema = inline_schema_for_type::<SendEventRequest>()
    )]
    async fn send_event(
        &self,
        Parameters(request): Parameters<SendEventRequest>,
    ) -> std::result::Result<String, String> {
        handle_send_event(&self.state, request).await
    }
}

#[tool_handler]
impl ServerHandler for QuickSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "quicksearch: incremental name lookup over a documentation index. \
                 Use search for one-shot ranked lookups. \
                 Use send_event to drive an interactive search box: send key events \
                 with the field text to type, 38/40 to move the selection, 13 to follow it.",
            )
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

/// Generate an inline JSON schema for MCP tools
///
/// Sets `inline_subschemas = true` so the tagged event enum is emitted inline
/// instead of behind `$ref`, which some MCP clients cannot follow.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();

    let json_object = match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => object,
        Ok(_) | Err(_) => {
            tracing::error!(
                "Schema for {} did not serialize to an object",
                std::any::type_name::<T>()
            );
            JsonObject::new()
        }
    };

    Arc::new(json_object)
}
