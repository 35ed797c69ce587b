//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the collection search tool.
///
/// This is the top-level parser that handles global options and
/// dispatches to subcommands.
#[derive(Parser)]
#[command(name = "galleria")]
#[command(about = "Explore The Met Museum Open Access collection from the terminal")]
#[command(version)]
pub struct Cli {
    /// Override the collection API base URL for this invocation
    #[arg(long = "base-url", global = true, env = "GALLERIA_BASE_URL")]
    pub base_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
