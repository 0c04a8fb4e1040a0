//! Search command - search documentation content

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::URI_SCHEME;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to search for (case-insensitive substring)
    pub query: String,

    /// Only search documents in this category
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

/// Search match item
#[derive(Debug, Serialize)]
pub struct SearchMatchItem {
    pub uri: String,
    pub path: String,
    pub evidence: Vec<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub count: usize,
    pub matches: Vec<SearchMatchItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.query.trim().is_empty() {
        return Err("Query cannot be empty".into());
    }

    // Lowercase once so matching and messages agree
    let query = args.query.to_lowercase();

    let matches = services.catalog.search(&query, args.category.as_deref())?;

    let output = SearchResponseOutput {
        query: query.clone(),
        count: matches.len(),
        matches: matches
            .iter()
            .map(|m| SearchMatchItem {
                uri: format!("{}{}/{}", URI_SCHEME, m.category, m.name),
                path: m.relative_path.clone(),
                evidence: m.evidence.clone(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.matches.is_empty() {
                println!("No results found for query: '{query}'");
            } else {
                println!(
                    "Found {} result(s):\n",
                    colors::number(&output.count.to_string())
                );

                for m in &output.matches {
                    println!(
                        "{} {}",
                        colors::uri(&m.uri),
                        colors::file_path(&m.path)
                    );
                    for line in &m.evidence {
                        // Cap long lines for terminal display
                        let truncated: String = if line.chars().count() > 100 {
                            let head: String = line.chars().take(97).collect();
                            format!("{head}...")
                        } else {
                            line.clone()
                        };
                        println!("    {}", colors::dim(&truncated));
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
