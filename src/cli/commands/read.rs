//! Read command - print a document by URI

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the read command
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Document URI (docs://{category}/{name})
    pub uri: String,
}

/// Read response
#[derive(Debug, Serialize)]
pub struct ReadResponseOutput {
    pub uri: String,
    pub content: String,
}

/// Execute the read command
pub async fn execute(
    args: ReadArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = services.catalog.read(&args.uri)?;

    match format {
        OutputFormat::Human => {
            // Document body verbatim, like cat
            print!("{content}");
        }
        OutputFormat::Json => {
            let output = ReadResponseOutput {
                uri: args.uri.clone(),
                content,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
