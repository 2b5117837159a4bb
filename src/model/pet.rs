use crate::store::Keyed;
use serde::{Deserialize, Serialize};

/// A pet registered in the document store.
///
/// `owner` holds the username of the owning user; an empty string means the
/// pet is unowned. Pets are mutated only by whole-record replacement, never
/// by partial-field patches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
}

impl Pet {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            owner: owner.into(),
        }
    }
}

impl Keyed for Pet {
    fn key(&self) -> &str {
        &self.id
    }
}
