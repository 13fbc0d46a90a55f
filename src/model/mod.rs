//! Data models for menagerie.
//!
//! This module defines the carrier types behind the graph:
//!
//! - [`Person`]: a person with a name, an optional age, and their pets
//! - [`Pet`]: a dog or a cat, each with a name and a breed
//! - [`DogBreed`] / [`CatBreed`]: the closed breed taxonomies
//! - [`Dataset`]: the roster served through the root fields

mod dataset;
mod person;
mod types;

pub use dataset::Dataset;
pub use person::{Person, Pet};
pub use types::{CatBreed, DogBreed};
