use anyhow::Result;

use crate::contract;
use crate::graphql::build_schema;
use crate::model::Dataset;

pub fn handle_schema(dataset: Dataset, pinned: bool) -> Result<()> {
    if pinned {
        print!("{}", contract::CONTRACT_SDL);
    } else {
        print!("{}", build_schema(dataset).sdl());
    }
    Ok(())
}
