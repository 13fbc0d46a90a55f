use super::types::{CatBreed, DogBreed};
use serde::{Deserialize, Serialize};

/// A pet in someone's household. The variant decides which breed taxonomy
/// applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pet {
    Dog { name: String, breed: DogBreed },
    Cat { name: String, breed: CatBreed },
}

impl Pet {
    pub fn dog(name: impl Into<String>, breed: DogBreed) -> Self {
        Pet::Dog {
            name: name.into(),
            breed,
        }
    }

    pub fn cat(name: impl Into<String>, breed: CatBreed) -> Self {
        Pet::Cat {
            name: name.into(),
            breed,
        }
    }

    /// Every pet has a name, whatever the species.
    pub fn name(&self) -> &str {
        match self {
            Pet::Dog { name, .. } | Pet::Cat { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pets: Vec<Pet>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: None,
            pets: Vec::new(),
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_pets(mut self, pets: Vec<Pet>) -> Self {
        self.pets = pets;
        self
    }
}
