use super::person::{Person, Pet};
use super::types::{CatBreed, DogBreed};
use crate::error::{MenagerieError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The data behind the graph's root fields.
///
/// `Query.person` serves the first person in the roster; `Query.peopleCount`
/// reports `people_count` when set, otherwise the roster length. The split
/// exists because the graph may describe a larger population than the demo
/// roster enumerates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people_count: Option<i32>,

    pub people: Vec<Person>,
}

impl Dataset {
    /// The built-in demo data served when no dataset file is given.
    pub fn sample() -> Self {
        Self {
            people_count: Some(42),
            people: vec![
                Person::new("Zack", "Angelo").with_age(39).with_pets(vec![
                    Pet::dog("Coco", DogBreed::Chihuahua),
                    Pet::cat("Nemo", CatBreed::Tabby),
                ]),
            ],
        }
    }

    /// Load a dataset from a YAML or JSON file, picked by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let dataset: Dataset = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };

        dataset.validate()?;
        Ok(dataset)
    }

    /// A dataset must be able to honor the non-null `person` root field.
    pub fn validate(&self) -> Result<()> {
        if self.people.is_empty() {
            return Err(MenagerieError::Dataset(
                "dataset contains no people; the person field could not resolve".to_string(),
            ));
        }
        if let Some(count) = self.people_count {
            if count < 0 {
                return Err(MenagerieError::Dataset(format!(
                    "people_count must be non-negative, got {}",
                    count
                )));
            }
        }
        for (i, person) in self.people.iter().enumerate() {
            if person.first_name.is_empty() || person.last_name.is_empty() {
                return Err(MenagerieError::Dataset(format!(
                    "person #{} is missing a first or last name",
                    i
                )));
            }
            for pet in &person.pets {
                if pet.name().is_empty() {
                    return Err(MenagerieError::Dataset(format!(
                        "a pet of {} {} has no name",
                        person.first_name, person.last_name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn people_count(&self) -> i32 {
        self.people_count.unwrap_or(self.people.len() as i32)
    }

    /// The person served by the `person` root field.
    pub fn person(&self) -> Option<&Person> {
        self.people.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sample_is_valid() {
        let dataset = Dataset::sample();
        dataset.validate().unwrap();
        assert_eq!(dataset.people_count(), 42);
        assert_eq!(dataset.person().unwrap().first_name, "Zack");
    }

    #[test]
    fn test_people_count_defaults_to_roster_length() {
        let dataset = Dataset {
            people_count: None,
            people: vec![Person::new("Ada", "Lovelace"), Person::new("Alan", "Turing")],
        };
        assert_eq!(dataset.people_count(), 2);
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let dataset = Dataset {
            people_count: Some(3),
            people: vec![],
        };
        let err = dataset.validate().unwrap_err();
        assert!(err.to_string().contains("no people"));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let dataset = Dataset {
            people_count: Some(-1),
            people: vec![Person::new("Ada", "Lovelace")],
        };
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn test_load_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        write!(
            file,
            r#"
people_count: 7
people:
  - first_name: Ada
    last_name: Lovelace
    age: 36
    pets:
      - kind: cat
        name: Charles
        breed: mix
"#
        )
        .unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.people_count(), 7);
        assert_eq!(dataset.person().unwrap().pets[0].name(), "Charles");
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"people": [{{"first_name": "Ada", "last_name": "Lovelace"}}]}}"#
        )
        .unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.people_count(), 1);
        assert!(dataset.person().unwrap().pets.is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_dataset() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "people: []").unwrap();
        assert!(Dataset::load(file.path()).is_err());
    }
}
