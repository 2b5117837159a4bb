use crate::connection::{AssembleError, Connection, DecodeError, Paginator};
use crate::directory::IdentityDirectory;
use crate::model::User;
use crate::store::StoreError;
use thiserror::Error;
use tracing::instrument;

/// Errors surfaced by user operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserServiceError {
    #[error(transparent)]
    Cursor(#[from] DecodeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("user not found: {0}")]
    NotFound(String),
}

impl From<AssembleError> for UserServiceError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::Decode(e) => Self::Cursor(e),
            AssembleError::Store(e) => Self::Store(e),
        }
    }
}

/// User resource façade. Users live in the identity provider; this service
/// only reads them.
pub struct UserService<D> {
    directory: D,
    paginator: Paginator,
}

impl<D> UserService<D>
where
    D: IdentityDirectory,
{
    pub fn new(directory: D, paginator: Paginator) -> Self {
        Self {
            directory,
            paginator,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_by_username(&self, username: &str) -> Result<User, UserServiceError> {
        self.directory
            .lookup(username)
            .await?
            .ok_or_else(|| UserServiceError::NotFound(username.to_owned()))
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        first: usize,
        after: &str,
    ) -> Result<Connection<User>, UserServiceError> {
        Ok(self.paginator.assemble(&self.directory, first, after).await?)
    }
}
