//! Connection assembly against an in-memory store, end to end through the
//! pet service: cursor decode, window fetch, total count, cursor re-encode.

use pawtrack::auth::PetAuthorizer;
use pawtrack::connection::{CursorEncoder, Paginator};
use pawtrack::directory::MemoryDirectory;
use pawtrack::model::Pet;
use pawtrack::service::{PetService, PetServiceError};
use pawtrack::store::MemoryTable;

fn encoder() -> CursorEncoder {
    CursorEncoder::new()
}

/// Service over a store holding pets `a` and `b`, in that order.
fn two_pet_service() -> PetService<MemoryTable<Pet>, MemoryDirectory> {
    let table = MemoryTable::new();
    table.seed(Pet::new("a", "Aster", 2, ""));
    table.seed(Pet::new("b", "Biscuit", 5, ""));
    PetService::new(
        table,
        MemoryDirectory::new(),
        PetAuthorizer::new(),
        Paginator::new(encoder()),
    )
}

#[tokio::test]
async fn full_list_fits_in_one_page() {
    let service = two_pet_service();

    let connection = service.list(10, "").await.unwrap();

    assert_eq!(connection.total_count, 2);
    let ids: Vec<&str> = connection
        .edges
        .iter()
        .map(|e| e.node.id.as_str())
        .collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(connection.page_info.end_cursor, encoder().encode("b"));
    assert!(!connection.page_info.has_next_page);
}

#[tokio::test]
async fn list_splits_across_two_pages() {
    let service = two_pet_service();

    let first_page = service.list(1, "").await.unwrap();
    assert_eq!(first_page.edges.len(), 1);
    assert_eq!(first_page.edges[0].node.id, "a");
    assert_eq!(first_page.page_info.end_cursor, encoder().encode("a"));
    assert!(first_page.page_info.has_next_page);

    let second_page = service
        .list(1, &first_page.page_info.end_cursor)
        .await
        .unwrap();
    assert_eq!(second_page.edges.len(), 1);
    assert_eq!(second_page.edges[0].node.id, "b");
    assert!(!second_page.page_info.has_next_page);
}

#[tokio::test]
async fn each_edge_carries_its_own_resume_cursor() {
    let service = two_pet_service();

    let connection = service.list(10, "").await.unwrap();

    // Resuming from the first edge's cursor lands on the second record.
    let resumed = service.list(10, &connection.edges[0].cursor).await.unwrap();
    assert_eq!(resumed.edges.len(), 1);
    assert_eq!(resumed.edges[0].node.id, "b");
}

#[tokio::test]
async fn zero_size_probe_at_the_end() {
    let service = two_pet_service();

    let connection = service.list(0, &encoder().encode("b")).await.unwrap();

    assert!(connection.edges.is_empty());
    assert_eq!(connection.page_info.end_cursor, "");
    assert!(!connection.page_info.has_next_page);
    assert_eq!(connection.total_count, 2);
}

#[tokio::test]
async fn zero_size_probe_with_records_remaining() {
    let service = two_pet_service();

    let connection = service.list(0, "").await.unwrap();

    assert!(connection.edges.is_empty());
    assert_eq!(connection.page_info.end_cursor, "");
    assert!(connection.page_info.has_next_page);
}

#[tokio::test]
async fn requesting_more_than_remaining_returns_short_page() {
    let service = two_pet_service();

    let connection = service.list(5, &encoder().encode("a")).await.unwrap();

    assert_eq!(connection.edges.len(), 1);
    assert_eq!(connection.edges[0].node.id, "b");
    assert!(!connection.page_info.has_next_page);
}

#[tokio::test]
async fn largest_possible_page_size_is_valid_input() {
    let service = two_pet_service();

    let connection = service
        .list(usize::MAX, &encoder().encode("a"))
        .await
        .unwrap();

    assert_eq!(connection.edges.len(), 1);
    assert_eq!(connection.edges[0].node.id, "b");
    assert!(!connection.page_info.has_next_page);
}

#[tokio::test]
async fn repeated_requests_are_idempotent_without_writes() {
    let service = two_pet_service();

    let one = service.list(1, "").await.unwrap();
    let two = service.list(1, "").await.unwrap();

    assert_eq!(one.edges, two.edges);
    assert_eq!(one.page_info, two.page_info);
}

#[tokio::test]
async fn malformed_cursor_is_a_typed_failure() {
    let service = two_pet_service();

    let err = service.list(10, "garbage!!").await.unwrap_err();
    assert!(matches!(err, PetServiceError::Cursor(_)));
}
