use anyhow::Result;

use crate::model::Dataset;

pub fn handle_data(dataset: Dataset) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}
