//! Pet CRUD and the ownership-transfer path against in-memory fakes.

use pawtrack::auth::{PetAuthorizer, Role};
use pawtrack::connection::{CursorEncoder, Paginator};
use pawtrack::directory::MemoryDirectory;
use pawtrack::model::{Identity, Pet, User};
use pawtrack::service::{PetService, PetServiceError};
use pawtrack::store::MemoryTable;

/// Service plus handles to the underlying fakes, so tests can assert what
/// actually got persisted.
struct Fixture {
    service: PetService<MemoryTable<Pet>, MemoryDirectory>,
    table: MemoryTable<Pet>,
    directory: MemoryDirectory,
}

fn fixture() -> Fixture {
    let table = MemoryTable::new();
    let directory = MemoryDirectory::new();
    let service = PetService::new(
        table.clone(),
        directory.clone(),
        PetAuthorizer::new(),
        Paginator::new(CursorEncoder::new()),
    );
    Fixture {
        service,
        table,
        directory,
    }
}

#[tokio::test]
async fn create_assigns_an_id_and_persists() {
    let fx = fixture();

    let pet = fx.service.create("Rex", 4, "").await.unwrap();

    assert!(!pet.id.is_empty());
    assert_eq!(pet.name, "Rex");
    assert_eq!(fx.service.get(&pet.id).await.unwrap(), pet);
}

#[tokio::test]
async fn get_unknown_pet_is_not_found() {
    let fx = fixture();
    let err = fx.service.get("missing").await.unwrap_err();
    assert_eq!(err, PetServiceError::NotFound("missing".into()));
}

#[tokio::test]
async fn delete_removes_the_record_once() {
    let fx = fixture();
    let pet = fx.service.create("Rex", 4, "").await.unwrap();

    fx.service.delete(&pet.id).await.unwrap();
    assert!(fx.table.snapshot().is_empty());

    let err = fx.service.delete(&pet.id).await.unwrap_err();
    assert_eq!(err, PetServiceError::NotFound(pet.id));
}

#[tokio::test]
async fn owner_can_transfer_their_pet() {
    let fx = fixture();
    fx.directory.seed(User::new("bob", "bob@example.com", ""));
    fx.table.seed(Pet::new("pet-1", "Rex", 4, "alice"));

    let updated = fx
        .service
        .transfer_owner(&Identity::new("alice"), "pet-1", "bob")
        .await
        .unwrap();

    assert_eq!(updated.owner, "bob");
    assert_eq!(fx.table.snapshot()[0].owner, "bob");
}

#[tokio::test]
async fn admin_can_transfer_a_pet_they_do_not_own() {
    let fx = fixture();
    fx.directory.seed(User::new("bob", "bob@example.com", ""));
    fx.table.seed(Pet::new("pet-1", "Rex", 4, "alice"));

    let admin = Identity::new("carol").with_group(Role::Admin.as_str());
    let updated = fx
        .service
        .transfer_owner(&admin, "pet-1", "bob")
        .await
        .unwrap();

    assert_eq!(updated.owner, "bob");
}

#[tokio::test]
async fn non_owner_is_denied_and_the_store_is_untouched() {
    let fx = fixture();
    fx.directory.seed(User::new("bob", "bob@example.com", ""));
    fx.table.seed(Pet::new("pet-1", "Rex", 4, "alice"));

    let err = fx
        .service
        .transfer_owner(&Identity::new("bob"), "pet-1", "bob")
        .await
        .unwrap_err();

    assert_eq!(err, PetServiceError::NotAuthorized("pet-1".into()));
    assert_eq!(fx.table.snapshot()[0].owner, "alice");
}

#[tokio::test]
async fn transfer_to_unknown_user_is_rejected_and_the_store_is_untouched() {
    let fx = fixture();
    fx.table.seed(Pet::new("pet-1", "Rex", 4, "alice"));

    let err = fx
        .service
        .transfer_owner(&Identity::new("alice"), "pet-1", "nobody")
        .await
        .unwrap_err();

    assert_eq!(err, PetServiceError::InvalidOwner("nobody".into()));
    assert_eq!(fx.table.snapshot()[0].owner, "alice");
}

#[tokio::test]
async fn empty_owner_unassigns_without_consulting_the_directory() {
    let fx = fixture();
    // Deliberately empty directory: unassignment must not look anyone up.
    fx.table.seed(Pet::new("pet-1", "Rex", 4, "alice"));

    let updated = fx
        .service
        .transfer_owner(&Identity::new("alice"), "pet-1", "")
        .await
        .unwrap();

    assert_eq!(updated.owner, "");
    assert_eq!(fx.table.snapshot()[0].owner, "");
}

#[tokio::test]
async fn transfer_of_a_missing_pet_is_not_found() {
    let fx = fixture();
    let admin = Identity::new("carol").with_group(Role::Admin.as_str());

    let err = fx
        .service
        .transfer_owner(&admin, "ghost", "bob")
        .await
        .unwrap_err();

    assert_eq!(err, PetServiceError::NotFound("ghost".into()));
}

#[tokio::test]
async fn authorization_reflects_the_owner_on_record_not_a_snapshot() {
    let fx = fixture();
    fx.directory.seed(User::new("bob", "bob@example.com", ""));
    fx.directory.seed(User::new("carol", "carol@example.com", ""));
    fx.table.seed(Pet::new("pet-1", "Rex", 4, "alice"));

    // First transfer hands the pet to bob.
    fx.service
        .transfer_owner(&Identity::new("alice"), "pet-1", "bob")
        .await
        .unwrap();

    // Alice is no longer the owner, so her second attempt is denied.
    let err = fx
        .service
        .transfer_owner(&Identity::new("alice"), "pet-1", "carol")
        .await
        .unwrap_err();
    assert_eq!(err, PetServiceError::NotAuthorized("pet-1".into()));

    // Bob, the current owner, can hand it on.
    let updated = fx
        .service
        .transfer_owner(&Identity::new("bob"), "pet-1", "carol")
        .await
        .unwrap();
    assert_eq!(updated.owner, "carol");
}
