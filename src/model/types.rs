use crate::error::{MenagerieError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogBreed {
    Chihuahua,
    Retriever,
    Lab,
}

impl fmt::Display for DogBreed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DogBreed::Chihuahua => write!(f, "chihuahua"),
            DogBreed::Retriever => write!(f, "retriever"),
            DogBreed::Lab => write!(f, "lab"),
        }
    }
}

impl FromStr for DogBreed {
    type Err = MenagerieError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "chihuahua" => Ok(DogBreed::Chihuahua),
            "retriever" | "golden-retriever" => Ok(DogBreed::Retriever),
            "lab" | "labrador" => Ok(DogBreed::Lab),
            _ => Err(MenagerieError::Dataset(format!("Invalid dog breed: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatBreed {
    Tabby,
    Mix,
}

impl fmt::Display for CatBreed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatBreed::Tabby => write!(f, "tabby"),
            CatBreed::Mix => write!(f, "mix"),
        }
    }
}

impl FromStr for CatBreed {
    type Err = MenagerieError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tabby" => Ok(CatBreed::Tabby),
            "mix" | "mixed" => Ok(CatBreed::Mix),
            _ => Err(MenagerieError::Dataset(format!("Invalid cat breed: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_breed_round_trip() {
        for breed in [DogBreed::Chihuahua, DogBreed::Retriever, DogBreed::Lab] {
            let parsed: DogBreed = breed.to_string().parse().unwrap();
            assert_eq!(parsed, breed);
        }
    }

    #[test]
    fn test_breed_aliases() {
        assert_eq!("labrador".parse::<DogBreed>().unwrap(), DogBreed::Lab);
        assert_eq!("mixed".parse::<CatBreed>().unwrap(), CatBreed::Mix);
    }

    #[test]
    fn test_unknown_breed_is_rejected() {
        assert!("poodle".parse::<DogBreed>().is_err());
        assert!("siamese".parse::<CatBreed>().is_err());
    }
}
