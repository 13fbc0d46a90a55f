use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menagerie")]
#[command(
    author,
    version,
    about = "A query-only GraphQL data graph of people and their pets"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a dataset file (YAML or JSON) replacing the built-in sample
    #[arg(long, global = true, env = "MENAGERIE_DATA")]
    pub data: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a GraphQL query against the data graph
    #[command(visible_alias = "q")]
    Query {
        /// The query document (use '-' to read from stdin)
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in SDL form
    Schema {
        /// Print the pinned contract file instead of the live schema
        #[arg(long)]
        pinned: bool,
    },

    /// Verify the live schema against the pinned contract
    Check,

    /// Print the active dataset as JSON
    Data,
}
