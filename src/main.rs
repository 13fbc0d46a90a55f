use anyhow::{Context, Result};
use clap::Parser;

use menagerie::cli::handlers::{handle_check, handle_data, handle_query, handle_schema};
use menagerie::cli::{Cli, Commands};
use menagerie::logging;
use menagerie::model::Dataset;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let dataset = match &cli.data {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))?,
        None => Dataset::sample(),
    };

    match cli.command {
        Commands::Query { query, variables } => handle_query(dataset, query, variables),
        Commands::Schema { pinned } => handle_schema(dataset, pinned),
        Commands::Check => handle_check(dataset),
        Commands::Data => handle_data(dataset),
    }
}
