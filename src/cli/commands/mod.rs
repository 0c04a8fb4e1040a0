//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod list;
pub mod read;
pub mod search;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use read::ReadArgs;
pub use search::SearchArgs;
