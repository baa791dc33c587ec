// ABOUTME: Integration tests for the FlavorDB ingredient flavor profile client
// ABOUTME: Verifies request shape, pass-through payloads, and failure collapsing against a mock server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{flavordb_config, refused_base_url, TEST_API_KEY, TEST_BEARER};
use culinary_data_clients::{FlavorDbClient, FlavorDbConfig, ServiceError, ServiceResponse};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FLAVOR_ERROR: &str = "FlavorDB request failed";

#[tokio::test]
async fn test_successful_lookup_returns_body_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .and(query_param("name", "sugar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"flavor": "sweet"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server));
    let response = client.get_ingredient_flavor_profile("sugar").await;

    assert_eq!(response, ServiceResponse::Payload(json!({"flavor": "sweet"})));
    assert_eq!(response.into_value(), json!({"flavor": "sweet"}));
}

#[tokio::test]
async fn test_request_carries_name_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .and(query_param("name", "black pepper"))
        .and(header("authorization", TEST_BEARER))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "black pepper",
            "profile": ["pungent", "woody"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server));
    let response = client.get_ingredient_flavor_profile("black pepper").await;
    assert!(!response.is_error());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(pairs, vec![("name".to_owned(), "black pepper".to_owned())]);
}

#[tokio::test]
async fn test_payload_is_not_validated() {
    let mock_server = MockServer::start().await;
    let body = json!([1, "two", {"three": null}]);

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server));
    let response = client.get_ingredient_flavor_profile("anything").await;
    assert_eq!(response.payload(), Some(&body));
}

#[tokio::test]
async fn test_server_error_collapses_to_fixed_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server));
    let response = client.get_ingredient_flavor_profile("salt").await;

    assert!(response.is_error());
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"error": FLAVOR_ERROR})
    );
}

#[tokio::test]
async fn test_client_error_status_collapses_to_same_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server));
    let response = client.get_ingredient_flavor_profile("salt").await;
    assert_eq!(response.into_value(), json!({"error": FLAVOR_ERROR}));
}

#[tokio::test]
async fn test_timeout_collapses_to_fixed_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"flavor": "late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server).with_timeout_secs(1));

    let err = client
        .fetch_ingredient_flavor_profile("saffron")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Timeout { .. }), "got {err:?}");

    let response = client.get_ingredient_flavor_profile("saffron").await;
    assert_eq!(response.into_value(), json!({"error": FLAVOR_ERROR}));
}

#[tokio::test]
async fn test_connection_refused_collapses_to_fixed_payload() {
    let config = FlavorDbConfig::new(TEST_API_KEY).with_base_url(refused_base_url());
    let client = FlavorDbClient::new(config);

    let err = client
        .fetch_ingredient_flavor_profile("thyme")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Connection { .. }), "got {err:?}");
    assert!(err.is_transport_failure());

    let response = client.get_ingredient_flavor_profile("thyme").await;
    assert_eq!(response.into_value(), json!({"error": FLAVOR_ERROR}));
}

#[tokio::test]
async fn test_non_json_body_collapses_to_fixed_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server));

    let err = client
        .fetch_ingredient_flavor_profile("cumin")
        .await
        .unwrap_err();
    assert!(
        matches!(err, ServiceError::InvalidResponse { .. }),
        "got {err:?}"
    );

    let response = client.get_ingredient_flavor_profile("cumin").await;
    assert_eq!(response.into_value(), json!({"error": FLAVOR_ERROR}));
}

#[tokio::test]
async fn test_fetch_surfaces_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server));
    let err = client
        .fetch_ingredient_flavor_profile("garlic")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn test_repeated_calls_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredient"))
        .and(query_param("name", "vanilla"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"flavor": "sweet"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = FlavorDbClient::new(flavordb_config(&mock_server));
    let first = client.get_ingredient_flavor_profile("vanilla").await;
    let second = client.get_ingredient_flavor_profile("vanilla").await;

    // Both calls reach the upstream; nothing is cached between them
    assert_eq!(first, second);
}
