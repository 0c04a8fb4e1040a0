//! Search docs tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::core::types::SearchMatch;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchDocsHandler {
    services: Arc<Services>,
}

impl SearchDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_results(&self, query: &str, matches: &[SearchMatch]) -> String {
        if matches.is_empty() {
            return format!("No results found for query: '{query}'");
        }

        let blocks: Vec<String> = matches
            .iter()
            .map(|m| {
                format!(
                    "## {}/{}\n**Path:** {}\n\n**Matches:**\n{}",
                    m.category,
                    m.name,
                    m.relative_path,
                    m.evidence.join("\n")
                )
            })
            .collect();

        format!(
            "Found {} result(s):\n\n{}",
            matches.len(),
            blocks.join("\n\n---\n\n")
        )
    }
}

#[async_trait]
impl McpToolHandler for SearchDocsHandler {
    fn name(&self) -> &str {
        "search_docs"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_docs".to_string(),
            description: "Search all markdown documentation for a literal substring. \
                         Matching is case-insensitive and returns up to 5 matching lines \
                         per document with line numbers. \
                         \
                         BEST FOR: finding which document covers a topic ('rate limit', \
                         'webhook retry') before reading it in full with resources/read. \
                         Pass 'category' to limit the search to one documentation area."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Substring to look for in documentation content",
                        "minLength": 1
                    },
                    "category": {
                        "type": "string",
                        "description": "Optional category to restrict the search to. \
                                       Use list_docs to discover available categories."
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchArgs {
            query: String,
            #[serde(default)]
            category: Option<String>,
        }

        // Parse and validate arguments
        let args: SearchArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        if args.query.trim().is_empty() {
            return Err(McpError::InvalidParams("Query cannot be empty".to_string()));
        }

        // Lowercase once so matching and messages agree
        let query = args.query.to_lowercase();

        let matches = self
            .services
            .catalog
            .search(&query, args.category.as_deref())
            .map_err(McpError::from)?;

        // Format results as Markdown
        let text = self.format_results(&query, &matches);

        Ok(text_content(text))
    }
}
