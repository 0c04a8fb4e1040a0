//! List docs tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::core::types::DocDescriptor;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListDocsHandler {
    services: Arc<Services>,
}

impl ListDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_docs(&self, docs: &[&DocDescriptor]) -> String {
        if docs.is_empty() {
            return "No documentation available. Add markdown files to the docs directory first."
                .to_string();
        }

        let mut output = format!("Available documentation ({}):\n\n", docs.len());

        for doc in docs {
            output.push_str(&format!("## {}\n", doc.display_name()));
            output.push_str(&format!("- **URI:** {}\n", doc.uri()));
            output.push_str(&format!("- **Path:** {}\n\n", doc.relative_path));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for ListDocsHandler {
    fn name(&self) -> &str {
        "list_docs"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_docs".to_string(),
            description: "List all markdown documentation available for search_docs queries \
                         and resources/read. Shows category, name, URI, and relative path \
                         for every document. \
                         \
                         USE THIS FIRST: Run before search_docs to discover which documents \
                         and categories exist. Pass 'category' to list one area only."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Optional category to restrict the listing to"
                    }
                },
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize, Default)]
        struct ListArgs {
            #[serde(default)]
            category: Option<String>,
        }

        let args: ListArgs = if args.is_null() {
            ListArgs::default()
        } else {
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?
        };

        // Rescan so the listing reflects the directory right now
        let snapshot = self.services.catalog.list().map_err(McpError::from)?;

        let docs: Vec<&DocDescriptor> = snapshot
            .iter()
            .filter(|d| match args.category.as_deref() {
                Some(category) => d.category == category,
                None => true,
            })
            .collect();

        // Format output
        let text = self.format_docs(&docs);

        Ok(text_content(text))
    }
}
