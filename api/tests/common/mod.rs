#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderName, HeaderValue},
    routing::{get, post},
};
use axum_test::{TestResponse, TestServer};
use clap::Parser;
use serde_json::{Value, json};
use yshy_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};

pub const SESSION_HEADER: &str = "x-session-id";

pub const IMAGE_REPLY: &str = "## Observations\nMild redness visible.\n\n\
## Possible Conditions\n- Contact Dermatitis (likely)\n- Yeast Infection\n\n\
**Severity Rating: 2**\n\n## Recommendations\nKeep the area dry.";

pub const SYMPTOM_REPLY: &str = "## Possible Conditions\n1. Urinary Tract Infection\n\n\
Severity: 4\n\n## Next Steps\nSee a doctor.";

/// Stand-in for the AI, geocoding and map search services.
pub async fn spawn_collaborators() -> String {
    async fn generate(Json(body): Json<Value>) -> Json<Value> {
        let has_image = body["contents"][0]["parts"]
            .as_array()
            .map(|parts| parts.iter().any(|p| p.get("inline_data").is_some()))
            .unwrap_or(false);
        let text = if has_image { IMAGE_REPLY } else { SYMPTOM_REPLY };

        Json(json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }))
    }

    async fn search(Query(params): Query<Vec<(String, String)>>) -> Json<Value> {
        let query = params
            .iter()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();

        if query.contains("Atlantis") {
            return Json(json!([]));
        }

        Json(json!([{
            "lat": "28.6139",
            "lon": "77.2090",
            "display_name": "New Delhi, Delhi, India"
        }]))
    }

    async fn interpreter() -> Json<Value> {
        Json(json!({
            "elements": [
                {
                    "type": "node", "id": 1, "lat": 28.6200, "lon": 77.2100,
                    "tags": { "name": "City Hospital", "amenity": "hospital", "phone": "011-1234" }
                },
                {
                    "type": "node", "id": 2, "lat": 28.6145, "lon": 77.2095,
                    "tags": { "name": "Corner Pharmacy", "amenity": "pharmacy" }
                },
                {
                    "type": "node", "id": 3, "lat": 28.6146, "lon": 77.2096,
                    "tags": { "amenity": "clinic" }
                }
            ]
        }))
    }

    let app = Router::new()
        .route("/v1beta/models/{model_action}", post(generate))
        .route("/search", get(search))
        .route("/interpreter", post(interpreter));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind collaborator listener");
    let addr = listener.local_addr().expect("collaborator address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("collaborator server");
    });

    format!("http://{addr}")
}

pub fn args_for(base_url: &str) -> Args {
    Args::try_parse_from([
        "yshy-api".to_string(),
        "--gemini-api-key".to_string(),
        "test-key".to_string(),
        "--gemini-base-url".to_string(),
        base_url.to_string(),
        "--nominatim-url".to_string(),
        base_url.to_string(),
        "--overpass-url".to_string(),
        format!("{base_url}/interpreter"),
        "--overpass-timeout-secs".to_string(),
        "5".to_string(),
    ])
    .expect("test arguments parse")
}

pub async fn test_server() -> TestServer {
    let base_url = spawn_collaborators().await;
    server_with(args_for(&base_url))
}

/// Server whose collaborators are unreachable.
pub fn offline_server() -> TestServer {
    server_with(args_for("http://127.0.0.1:9"))
}

pub fn server_with(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).expect("state builds");
    let app = router(app_state).expect("router builds");
    TestServer::new(app).expect("test server starts")
}

pub fn session_of(response: &TestResponse) -> HeaderValue {
    response
        .headers()
        .get(SESSION_HEADER)
        .cloned()
        .expect("session header is echoed")
}

pub fn session_header() -> HeaderName {
    HeaderName::from_static(SESSION_HEADER)
}
