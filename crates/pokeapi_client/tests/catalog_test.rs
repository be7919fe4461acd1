//! Catalog listing and species detail against a mocked PokeAPI

use dex_core::DexConfig;
use pokeapi_client::{ApiError, PokeApiClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PokeApiClient {
    let config = DexConfig {
        api_base: server.uri(),
        max_retries: 0,
        ..DexConfig::default()
    };
    PokeApiClient::new(&config).expect("client")
}

#[tokio::test]
async fn test_catalog_lists_entries_with_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "next": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" },
                { "name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server).catalog(3).await.unwrap();

    let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(entries[1].name, "ivysaur");
}

#[tokio::test]
async fn test_catalog_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server).catalog(10).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 429, .. }));
}

#[tokio::test]
async fn test_pokemon_detail_follows_species_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": { "front_default": "https://img.test/1.png" },
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "" } },
                { "slot": 2, "type": { "name": "poison", "url": "" } }
            ],
            "abilities": [{ "ability": { "name": "overgrow", "url": "" } }],
            "species": { "name": "bulbasaur", "url": format!("{}/pokemon-species/1/", server.uri()) }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genera": [{ "genus": "Seed Pokémon", "language": { "name": "en", "url": "" } }],
            "flavor_text_entries": [{
                "flavor_text": "A strange seed was\nplanted on its\nback at birth.",
                "language": { "name": "en", "url": "" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let detail = client_for(&server).pokemon_detail(1).await.unwrap();

    assert_eq!(detail.name, "bulbasaur");
    assert_eq!(detail.height, 0.7);
    assert_eq!(detail.weight, 6.9);
    assert_eq!(detail.types, vec!["GRASS", "POISON"]);
    assert_eq!(detail.category, "Seed Pokémon");
    assert_eq!(detail.description, "A strange seed was planted on its back at birth.");
}

#[tokio::test]
async fn test_pokemon_detail_species_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "species": { "name": "bulbasaur", "url": format!("{}/pokemon-species/1/", server.uri()) }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/1/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).pokemon_detail(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 503, .. }));
}
