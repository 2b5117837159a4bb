use crate::connection::{AssembleError, Connection, DecodeError, Paginator};
use crate::model::Person;
use crate::store::{StoreError, TableClient};
use thiserror::Error;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Errors surfaced by person operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonServiceError {
    #[error(transparent)]
    Cursor(#[from] DecodeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("person not found: {0}")]
    NotFound(String),
}

impl From<AssembleError> for PersonServiceError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::Decode(e) => Self::Cursor(e),
            AssembleError::Store(e) => Self::Store(e),
        }
    }
}

/// Person resource façade. People carry no ownership, so there is no
/// authorization path here.
pub struct PersonService<P> {
    people: P,
    paginator: Paginator,
}

impl<P> PersonService<P>
where
    P: TableClient<Person>,
{
    pub fn new(people: P, paginator: Paginator) -> Self {
        Self { people, paginator }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, age: u32) -> Result<Person, PersonServiceError> {
        let person = Person::new(Uuid::new_v4().to_string(), name, age);
        self.people.put(person.clone()).await?;
        debug!(person_id = %person.id, "person created");
        Ok(person)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Person, PersonServiceError> {
        self.people
            .get(id)
            .await?
            .ok_or_else(|| PersonServiceError::NotFound(id.to_owned()))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), PersonServiceError> {
        if self.people.delete(id).await? {
            debug!(person_id = id, "person deleted");
            Ok(())
        } else {
            Err(PersonServiceError::NotFound(id.to_owned()))
        }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        first: usize,
        after: &str,
    ) -> Result<Connection<Person>, PersonServiceError> {
        Ok(self.paginator.assemble(&self.people, first, after).await?)
    }
}
