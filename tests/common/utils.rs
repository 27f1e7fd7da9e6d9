use std::net::TcpListener;
use std::sync::Arc;

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::Value;

use ligamanager_backend::run;
use ligamanager_backend::storage::memory::InMemoryLeagueStore;
use ligamanager_backend::storage::LeagueStore;
use ligamanager_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
}

/// Spin up the app on a random port, backed by the in-memory store.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let store: Arc<dyn LeagueStore> = Arc::new(InMemoryLeagueStore::new());
    let server = run(listener, store).expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp { address }
}

/// Upload a roster file through the import endpoint.
pub async fn import_roster(app: &TestApp, csv: &str) -> reqwest::Response {
    import_roster_file(app, csv, "roster.csv").await
}

pub async fn import_roster_file(app: &TestApp, content: &str, file_name: &str) -> reqwest::Response {
    let part = reqwest::multipart::Part::text(content.to_string())
        .file_name(file_name.to_string())
        .mime_str("text/csv")
        .expect("Failed to build multipart part");
    let form = reqwest::multipart::Form::new().part("file", part);

    Client::new()
        .post(format!("{}/league/import", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send import request")
}

/// Fetch the roster as returned by the teams endpoint.
pub async fn list_teams(app: &TestApp) -> Vec<Value> {
    let response = Client::new()
        .get(format!("{}/league/teams", app.address))
        .send()
        .await
        .expect("Failed to list teams");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse teams response");
    body["data"].as_array().cloned().unwrap_or_default()
}

/// Fetch all matches.
pub async fn list_matches(app: &TestApp) -> Vec<Value> {
    let response = Client::new()
        .get(format!("{}/league/matches", app.address))
        .send()
        .await
        .expect("Failed to list matches");
    assert!(response.status().is_success());
    let body: Value = response
        .json()
        .await
        .expect("Failed to parse matches response");
    body["data"].as_array().cloned().unwrap_or_default()
}

/// Generate matches for the whole roster.
pub async fn generate_matches(app: &TestApp, format: &str) -> reqwest::Response {
    Client::new()
        .post(format!("{}/league/matches/generate", app.address))
        .json(&serde_json::json!({ "format": format }))
        .send()
        .await
        .expect("Failed to send generate request")
}

/// Record a result for a match.
pub async fn record_result(
    app: &TestApp,
    match_id: &str,
    score1: i64,
    score2: i64,
) -> reqwest::Response {
    Client::new()
        .put(format!("{}/league/matches/{}/result", app.address, match_id))
        .json(&serde_json::json!({ "score1": score1, "score2": score2 }))
        .send()
        .await
        .expect("Failed to send result request")
}

/// Fetch the standings rows.
pub async fn get_standings(app: &TestApp) -> Vec<Value> {
    let response = Client::new()
        .get(format!("{}/league/standings", app.address))
        .send()
        .await
        .expect("Failed to get standings");
    assert!(response.status().is_success());
    let body: Value = response
        .json()
        .await
        .expect("Failed to parse standings response");
    body["data"]["standings"].as_array().cloned().unwrap_or_default()
}
