use crate::store::Keyed;
use serde::{Deserialize, Serialize};

/// A person record in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

impl Keyed for Person {
    fn key(&self) -> &str {
        &self.id
    }
}
