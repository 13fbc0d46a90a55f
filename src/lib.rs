//! # Menagerie - a query-only GraphQL data graph of people and their pets
//!
//! Menagerie declares a small data graph (people, pets, breeds) in typed Rust,
//! pins the same declaration as SDL in `schema.graphql`, and ships the tooling
//! to keep the two provably in agreement. It is meant as a fixture for GraphQL
//! tooling: a schema you can query locally, render, and diff.
//!
//! ## Features
//!
//! - **Typed schema**: the graph is declared with `async-graphql` derives,
//!   so every field, argument, and nullability lives in the type system
//! - **Pinned contract**: `schema.graphql` is embedded and the `check`
//!   command reports any drift between it and the live declaration
//! - **Local execution**: queries run against a demo dataset, or any
//!   YAML/JSON dataset supplied with `--data`
//!
//! ## Quick Start
//!
//! ```bash
//! # Run a query against the built-in sample data
//! menagerie query '{ peopleCount person { firstName pets { name } } }'
//!
//! # Print the live schema
//! menagerie schema
//!
//! # Verify it against the pinned contract
//! menagerie check
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`contract`]: Pinned SDL and the normalized type graph used for diffing
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema declaration and resolvers
//! - [`model`]: Carrier types (Person, Pet, breeds) and the dataset

pub mod cli;

/// Pinned SDL contract and structural schema comparison.
///
/// Home of [`contract::TypeGraph`] and the embedded `schema.graphql`.
pub mod contract;

/// Error types and result aliases.
///
/// Defines the `MenagerieError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema declaration and resolvers.
///
/// Provides the async-graphql types and the schema builder.
pub mod graphql;

pub mod logging;

/// Data models behind the graph.
///
/// Includes `Person`, `Pet`, the breed enums, and `Dataset`.
pub mod model;
