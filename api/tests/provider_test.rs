mod common;

use axum::http::{StatusCode, header::CONTENT_DISPOSITION};
use common::{offline_server, session_header, session_of, test_server};
use serde_json::{Value, json};

#[tokio::test]
async fn search_returns_providers_nearest_first() {
    let server = test_server().await;

    let response = server
        .post("/providers/search")
        .json(&json!({ "city": "New Delhi", "state": "Delhi", "radius_km": 5 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let outcome = &body["data"];
    assert_eq!(outcome["location"]["query"], "New Delhi, Delhi, India");
    assert_eq!(outcome["strategy"], "healthcare_amenities");

    let providers = outcome["providers"].as_array().unwrap();
    assert!(providers.len() >= 2);
    assert_eq!(providers[0]["name"], "Corner Pharmacy");
    assert_eq!(providers[0]["facility_type"], "Pharmacy");

    let hospital = providers
        .iter()
        .find(|p| p["name"] == "City Hospital")
        .unwrap();
    assert_eq!(hospital["phone"], "011-1234");

    let distances: Vec<f64> = providers
        .iter()
        .map(|p| p["distance_km"].as_f64().unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn resource_report_follows_the_last_search() {
    let server = test_server().await;

    let missing = server.get("/providers/report").await;
    missing.assert_status(StatusCode::NOT_FOUND);

    let search = server
        .post("/providers/search")
        .json(&json!({ "city": "New Delhi", "state": "Delhi" }))
        .await;
    search.assert_status_ok();

    let report = server
        .get("/providers/report")
        .add_header(session_header(), session_of(&search))
        .await;
    report.assert_status_ok();

    let disposition = report.headers().get(CONTENT_DISPOSITION).unwrap();
    assert!(disposition.to_str().unwrap().contains(".txt"));
    assert!(report.text().contains("City Hospital"));
}

#[tokio::test]
async fn unknown_location_explains_what_to_try() {
    let server = test_server().await;

    let response = server
        .post("/providers/search")
        .json(&json!({ "city": "Atlantis", "state": "Other" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("Atlantis"));
    assert!(body["guidance"].as_str().is_some());
}

#[tokio::test]
async fn search_input_is_validated() {
    let server = offline_server();

    server
        .post("/providers/search")
        .json(&json!({ "city": "Pune", "state": "Maharashtra", "radius_km": 80 }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    server
        .post("/providers/search")
        .json(&json!({ "city": "", "state": "Maharashtra" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn map_service_outage_is_a_bad_gateway() {
    let server = offline_server();

    server
        .post("/providers/search")
        .json(&json!({ "city": "Pune", "state": "Maharashtra" }))
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn resources_depend_on_region() {
    let server = offline_server();

    let india: Value = server.get("/resources").await.json();
    assert_eq!(india["data"]["region"], "india");

    let abroad: Value = server
        .get("/resources")
        .add_query_param("state", "Canada")
        .await
        .json();
    assert_eq!(abroad["data"]["region"], "international");
    assert_ne!(india["data"]["emergency"], abroad["data"]["emergency"]);
}

#[tokio::test]
async fn health_and_config_are_public() {
    let server = offline_server();

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert!(health.headers().get("x-session-id").is_none());

    let config: Value = server.get("/config").await.json();
    assert_eq!(config["max_images_per_analysis"], 4);
    assert_eq!(config["default_search_radius_km"], 15);
}
