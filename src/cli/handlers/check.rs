use anyhow::Result;
use colored::Colorize;

use crate::contract::{self, TypeGraph};
use crate::graphql::build_schema;
use crate::model::Dataset;

pub fn handle_check(dataset: Dataset) -> Result<()> {
    let expected = contract::pinned()?;
    let actual = TypeGraph::from_sdl(&build_schema(dataset).sdl())?;

    let diffs = expected.diff(&actual);
    if diffs.is_empty() {
        println!(
            "{} live schema matches the pinned contract ({} types)",
            "OK".green(),
            expected.len()
        );
        return Ok(());
    }

    for diff in &diffs {
        println!("{} {}", "MISMATCH".red(), diff);
    }
    anyhow::bail!(
        "schema deviates from the pinned contract ({} mismatches)",
        diffs.len()
    )
}
