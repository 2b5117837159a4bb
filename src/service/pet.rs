use crate::auth::{PetAction, PetAuthorizer};
use crate::connection::{AssembleError, Connection, DecodeError, Paginator};
use crate::directory::IdentityDirectory;
use crate::model::{Identity, Pet};
use crate::store::{StoreError, TableClient};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Errors surfaced by pet operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PetServiceError {
    /// The caller handed us a cursor this core never produced.
    #[error(transparent)]
    Cursor(#[from] DecodeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("pet not found: {0}")]
    NotFound(String),

    #[error("not authorized to transfer ownership of pet {0}")]
    NotAuthorized(String),

    /// The proposed owner does not resolve to a real user.
    #[error("{0} is not a known user")]
    InvalidOwner(String),
}

impl From<AssembleError> for PetServiceError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::Decode(e) => Self::Cursor(e),
            AssembleError::Store(e) => Self::Store(e),
        }
    }
}

/// Pet resource façade: CRUD plus the ownership-transfer path.
pub struct PetService<P, D> {
    pets: P,
    directory: D,
    authorizer: PetAuthorizer,
    paginator: Paginator,
}

impl<P, D> PetService<P, D>
where
    P: TableClient<Pet>,
    D: IdentityDirectory,
{
    pub fn new(pets: P, directory: D, authorizer: PetAuthorizer, paginator: Paginator) -> Self {
        Self {
            pets,
            directory,
            authorizer,
            paginator,
        }
    }

    /// Register a new pet. `owner` may be empty for an unowned pet.
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, age: u32, owner: &str) -> Result<Pet, PetServiceError> {
        let pet = Pet::new(Uuid::new_v4().to_string(), name, age, owner);
        self.pets.put(pet.clone()).await?;
        debug!(pet_id = %pet.id, "pet created");
        Ok(pet)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Pet, PetServiceError> {
        self.pets
            .get(id)
            .await?
            .ok_or_else(|| PetServiceError::NotFound(id.to_owned()))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), PetServiceError> {
        if self.pets.delete(id).await? {
            debug!(pet_id = id, "pet deleted");
            Ok(())
        } else {
            Err(PetServiceError::NotFound(id.to_owned()))
        }
    }

    /// List pets as a connection of up to `first` edges after `after`.
    #[instrument(skip(self))]
    pub async fn list(&self, first: usize, after: &str) -> Result<Connection<Pet>, PetServiceError> {
        Ok(self.paginator.assemble(&self.pets, first, after).await?)
    }

    /// Reassign a pet's owner, or clear it by passing an empty `new_owner`.
    ///
    /// The sequence is fetch, authorize, validate, persist: the authorization
    /// decision keys off the owner on record right now, not the proposed one,
    /// and a non-empty proposed owner must resolve in the identity directory.
    /// The final write is a full-record overwrite with no concurrency token,
    /// so concurrent transfers race last-writer-wins.
    #[instrument(skip(self, requestor), fields(requestor = %requestor.username))]
    pub async fn transfer_owner(
        &self,
        requestor: &Identity,
        id: &str,
        new_owner: &str,
    ) -> Result<Pet, PetServiceError> {
        let mut pet = self
            .pets
            .get(id)
            .await?
            .ok_or_else(|| PetServiceError::NotFound(id.to_owned()))?;

        let action = PetAction::TransferOwnership;
        if !self.authorizer.is_authorized(requestor, &pet, action) {
            warn!(pet_id = id, action = action.as_str(), "transfer denied");
            return Err(PetServiceError::NotAuthorized(id.to_owned()));
        }

        // Empty means unassign; only a real username may be assigned.
        if !new_owner.is_empty() && self.directory.lookup(new_owner).await?.is_none() {
            return Err(PetServiceError::InvalidOwner(new_owner.to_owned()));
        }

        pet.owner = new_owner.to_owned();
        self.pets.put(pet.clone()).await?;
        debug!(pet_id = id, new_owner, "ownership transferred");
        Ok(pet)
    }
}
