//! GraphQL schema and resolvers for menagerie.
//!
//! Declares the people/pets data graph with `async-graphql` and exposes it
//! for local execution. The declaration here is the source the pinned
//! `schema.graphql` contract is checked against.
//!
//! ## Usage
//!
//! ```bash
//! # Execute a query against the built-in sample data
//! menagerie query '{ peopleCount person { firstName pets { name } } }'
//!
//! # Print the live schema as SDL
//! menagerie schema
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `peopleCount`, `person`
//! - **Types**: `Person`, `Pet` (interface), `Dog`, `Cat`, `DogBreed`, `CatBreed`

mod schema;
mod types;

pub use schema::{MenagerieSchema, QueryRoot, build_schema};
pub use types::*;
