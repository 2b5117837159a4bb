//! # Ownership Authorization
//!
//! A capability check, not a policy engine: the decision is a pure function
//! of the caller's identity, the pet's current state, and the attempted
//! action. There are no stored grants, no allow/deny lists, and nothing to
//! mutate: a pet's owner can change between calls, and the next decision
//! simply reads the new owner.

use crate::model::{Identity, Pet};

/// Roles recognized from the identity provider's group claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
}

impl Role {
    /// The provider group name carrying this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
        }
    }
}

/// Actions a caller may attempt against a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetAction {
    /// An action this core does not recognize. Always denied.
    #[default]
    Undefined,
    /// Reassign (or clear) the pet's `owner` attribute.
    TransferOwnership,
}

impl PetAction {
    /// Stable label for log fields and policy audit trails.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TransferOwnership => "pet_update_owner",
            Self::Undefined => "unknown",
        }
    }
}

/// Decides whether an identity may perform an action on a pet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetAuthorizer;

impl PetAuthorizer {
    pub fn new() -> Self {
        Self
    }

    /// Total and side-effect free; there is no failure mode.
    ///
    /// Evaluated in order: admins are allowed unconditionally; ownership
    /// transfer is allowed only when the caller is the pet's current owner;
    /// everything else is denied.
    pub fn is_authorized(&self, identity: &Identity, pet: &Pet, action: PetAction) -> bool {
        if identity.in_group(Role::Admin.as_str()) {
            return true;
        }

        match action {
            PetAction::TransferOwnership => identity.username == pet.owner,
            PetAction::Undefined => false,
        }
    }
}
