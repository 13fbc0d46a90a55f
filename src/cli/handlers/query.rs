use std::io::Read;
use std::time::Instant;

use anyhow::Result;

use crate::graphql::build_schema;
use crate::model::Dataset;

pub fn handle_query(dataset: Dataset, query: String, variables: Option<String>) -> Result<()> {
    let query = resolve_query(query)?;

    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    };

    let schema = build_schema(dataset);
    let request = async_graphql::Request::new(query).variables(vars);

    let start = Instant::now();
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    tracing::debug!("query took {}μs", start.elapsed().as_micros());

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn resolve_query(query: String) -> Result<String> {
    if query == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content.trim().to_string());
    }
    Ok(query)
}
