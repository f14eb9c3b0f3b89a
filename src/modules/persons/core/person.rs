use serde::{Deserialize, Serialize};

/// A stored person record. The `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: u64,
    pub hobbies: Vec<String>,
}

/// The client-controlled part of a person, as accepted by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub age: u64,
    pub hobbies: Vec<String>,
}

impl Person {
    pub fn from_fields(id: impl Into<String>, fields: PersonFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            age: fields.age,
            hobbies: fields.hobbies,
        }
    }
}
