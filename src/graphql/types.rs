use crate::model;
use async_graphql::{Enum, Interface, Object, SimpleObject};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum DogBreed {
    Chihuahua,
    Retriever,
    Lab,
}

impl From<model::DogBreed> for DogBreed {
    fn from(b: model::DogBreed) -> Self {
        match b {
            model::DogBreed::Chihuahua => DogBreed::Chihuahua,
            model::DogBreed::Retriever => DogBreed::Retriever,
            model::DogBreed::Lab => DogBreed::Lab,
        }
    }
}

impl From<DogBreed> for model::DogBreed {
    fn from(b: DogBreed) -> Self {
        match b {
            DogBreed::Chihuahua => model::DogBreed::Chihuahua,
            DogBreed::Retriever => model::DogBreed::Retriever,
            DogBreed::Lab => model::DogBreed::Lab,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum CatBreed {
    Tabby,
    Mix,
}

impl From<model::CatBreed> for CatBreed {
    fn from(b: model::CatBreed) -> Self {
        match b {
            model::CatBreed::Tabby => CatBreed::Tabby,
            model::CatBreed::Mix => CatBreed::Mix,
        }
    }
}

impl From<CatBreed> for model::CatBreed {
    fn from(b: CatBreed) -> Self {
        match b {
            CatBreed::Tabby => model::CatBreed::Tabby,
            CatBreed::Mix => model::CatBreed::Mix,
        }
    }
}

pub struct Dog {
    name: String,
    breed: DogBreed,
}

#[Object]
impl Dog {
    async fn name(&self) -> &str {
        &self.name
    }

    async fn dog_breed(&self) -> DogBreed {
        self.breed
    }
}

pub struct Cat {
    name: String,
    breed: CatBreed,
}

#[Object]
impl Cat {
    async fn name(&self) -> &str {
        &self.name
    }

    async fn cat_breed(&self) -> CatBreed {
        self.breed
    }
}

/// The capability every pet exposes: a non-null name. Concrete types add
/// their breed field on top.
#[derive(Interface)]
#[graphql(field(name = "name", ty = "&str"))]
pub enum Pet {
    Dog(Dog),
    Cat(Cat),
}

impl From<model::Pet> for Pet {
    fn from(pet: model::Pet) -> Self {
        match pet {
            model::Pet::Dog { name, breed } => Pet::Dog(Dog {
                name,
                breed: breed.into(),
            }),
            model::Pet::Cat { name, breed } => Pet::Cat(Cat {
                name,
                breed: breed.into(),
            }),
        }
    }
}

/// A person as exposed through the graph. The `*_arg_val` fields are filled
/// by the `person` resolver with whatever probe arguments the query carried;
/// they stay null otherwise.
#[derive(SimpleObject)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub string_arg_val: Option<String>,
    pub int_arg_val: Option<i32>,
    pub float_arg_val: Option<f64>,
    pub bool_arg_val: Option<bool>,
    pub pets: Vec<Pet>,
}

impl From<model::Person> for Person {
    fn from(p: model::Person) -> Self {
        Self {
            first_name: p.first_name,
            last_name: p.last_name,
            age: p.age,
            string_arg_val: None,
            int_arg_val: None,
            float_arg_val: None,
            bool_arg_val: None,
            pets: p.pets.into_iter().map(Into::into).collect(),
        }
    }
}
