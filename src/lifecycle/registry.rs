use crate::auth::PetAuthorizer;
use crate::connection::{CursorEncoder, Paginator};
use crate::directory::IdentityDirectory;
use crate::model::{Person, Pet};
use crate::service::{PersonService, PetService, UserService};
use crate::store::TableClient;
use tracing::info;

/// Builds every resource service from the injected store and directory
/// clients.
///
/// This is the composition a serverless handler performs once per cold start:
/// all dependencies arrive through [`Registry::new`], and nothing here is a
/// process-wide singleton. The directory client is cloned between the pet and
/// user services; clients are expected to be cheap handles (the in-memory
/// fakes share state across clones, as real SDK clients do).
pub struct Registry<PT, PE, D> {
    pub pets: PetService<PT, D>,
    pub people: PersonService<PE>,
    pub users: UserService<D>,
}

impl<PT, PE, D> Registry<PT, PE, D>
where
    PT: TableClient<Pet>,
    PE: TableClient<Person>,
    D: IdentityDirectory + Clone,
{
    pub fn new(pet_table: PT, person_table: PE, directory: D) -> Self {
        let paginator = Paginator::new(CursorEncoder::new());

        let registry = Self {
            pets: PetService::new(
                pet_table,
                directory.clone(),
                PetAuthorizer::new(),
                paginator,
            ),
            people: PersonService::new(person_table, paginator),
            users: UserService::new(directory, paginator),
        };
        info!("resource services wired");
        registry
    }
}
