use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::model::Dataset;

use super::types::*;

pub type MenagerieSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(dataset: Dataset) -> MenagerieSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(Arc::new(dataset))
        .finish()
}

fn get_dataset<'a>(ctx: &Context<'a>) -> &'a Arc<Dataset> {
    ctx.data::<Arc<Dataset>>().unwrap()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Number of people the graph knows about
    async fn people_count(&self, ctx: &Context<'_>) -> i32 {
        get_dataset(ctx).people_count()
    }

    /// Fetch a person. Each test* argument is echoed back through the
    /// matching *ArgVal field, so clients can probe scalar round-trips.
    async fn person(
        &self,
        ctx: &Context<'_>,
        test_string_arg: Option<String>,
        test_int_arg: Option<i32>,
        test_float_arg: Option<f64>,
        test_bool_arg: Option<bool>,
    ) -> async_graphql::Result<Person> {
        let dataset = get_dataset(ctx);
        let person = dataset
            .person()
            .ok_or_else(|| async_graphql::Error::new("dataset contains no people"))?;

        let mut person: Person = person.clone().into();
        person.string_arg_val = test_string_arg;
        person.int_arg_val = test_int_arg;
        person.float_arg_val = test_float_arg;
        person.bool_arg_val = test_bool_arg;
        Ok(person)
    }
}
