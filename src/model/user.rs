use crate::store::Keyed;
use serde::{Deserialize, Serialize};

/// A user account sourced from the managed identity provider.
///
/// Users are created and mutated by the provider, never by this core; every
/// view of them here is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.username
    }
}
