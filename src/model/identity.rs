use std::collections::HashSet;

/// The authenticated caller, as decoded from identity-provider claims by the
/// (excluded) transport layer.
///
/// `groups` is the set of provider group names the caller belongs to; role
/// checks in [`crate::auth`] read it directly. This core never mutates an
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub username: String,
    pub groups: HashSet<String>,
}

impl Identity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            groups: HashSet::new(),
        }
    }

    /// Builder-style helper to add a group membership.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    /// Whether the caller belongs to the named provider group.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}
