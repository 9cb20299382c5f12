//! Integration tests for the API client against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use maester_api::{ApiClient, ApiConfig, ApiError};
use maester_core::{Category, PageIndex};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        page_size: 5,
    })
    .expect("client should build against mock server URI")
}

#[tokio::test]
async fn initial_houses_fetch_hits_page_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/houses"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Stark", "words": "Winter is Coming", "currentLord": ""}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let houses = client.fetch_houses(PageIndex::default()).await.unwrap();

    assert_eq!(houses.len(), 1);
    assert_eq!(houses[0].name, "Stark");
    assert_eq!(houses[0].words, "Winter is Coming");
    // Vacant seat: renders as "Unknown" without any further network call.
    assert_eq!(houses[0].current_lord, None);
}

#[tokio::test]
async fn next_page_carries_incremented_wire_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "A Clash of Kings", "authors": ["George R. R. Martin"], "numberOfPages": 768}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = PageIndex::default();
    page.advance();

    let books = client.fetch_books(page).await.unwrap();
    assert_eq!(books[0].authors, ["George R. R. Martin"]);
    assert_eq!(books[0].number_of_pages, 768);
}

#[tokio::test]
async fn page_past_the_end_is_an_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = PageIndex::default();
    for _ in 0..41 {
        page.advance();
    }

    let characters = client.fetch_characters(page).await.unwrap();
    assert!(characters.is_empty());
}

#[tokio::test]
async fn server_error_surfaces_as_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/houses"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.fetch_houses(PageIndex::default()).await;
    assert!(matches!(result, Err(ApiError::Status { code: 500 })));
}

#[tokio::test]
async fn malformed_body_surfaces_as_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/houses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.fetch_houses(PageIndex::default()).await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn character_hyperlink_resolves_to_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/characters/339"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Eddard Stark",
            "gender": "Male",
            "aliases": ["Ned"],
            "titles": ["Lord of Winterfell"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = format!("{}/characters/339", server.uri());
    let character = client.fetch_character(&url).await.unwrap();

    assert_eq!(character.name, "Eddard Stark");
    assert_eq!(character.aliases, ["Ned"]);
    assert_eq!(character.titles, ["Lord of Winterfell"]);
}
