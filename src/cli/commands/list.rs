//! List command - list discovered documentation

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show documents in this category
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

/// Document list item
#[derive(Debug, Serialize)]
pub struct DocListItem {
    pub uri: String,
    pub category: String,
    pub name: String,
    pub path: String,
}

/// Document list response
#[derive(Debug, Serialize)]
pub struct DocListResponse {
    pub count: usize,
    pub docs: Vec<DocListItem>,
}

/// Execute the list command
pub async fn execute(
    args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let docs = services.catalog.list()?;

    let items: Vec<DocListItem> = docs
        .iter()
        .filter(|doc| match args.category.as_deref() {
            Some(category) => doc.category == category,
            None => true,
        })
        .map(|doc| DocListItem {
            uri: doc.uri(),
            category: doc.category.clone(),
            name: doc.name.clone(),
            path: doc.relative_path.clone(),
        })
        .collect();

    let response = DocListResponse {
        count: items.len(),
        docs: items,
    };

    match format {
        OutputFormat::Human => {
            if response.docs.is_empty() {
                println!(
                    "No documentation found. Add markdown files to {}.",
                    colors::file_path(&services.catalog.docs_dir().display().to_string())
                );
            } else {
                println!(
                    "{} ({}):",
                    colors::label("Documentation"),
                    colors::number(&response.count.to_string())
                );
                for doc in &response.docs {
                    println!(
                        "  {:<40} {}",
                        colors::uri(&doc.uri),
                        colors::dim(&doc.path)
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
