// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use joblane_core::memory::MemoryStore;
use joblane_server::infra::config::{
    AuthConfig, Config, CorsConfig, DatabaseConfig, ServerConfig,
};
use joblane_server::{AppState, routes};
use serde_json::{Value, json};

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused-in-tests".into(),
            max_connections: 1,
        },
        auth: AuthConfig {
            token_key: "integration-test-signing-key".into(),
            token_ttl_secs: 3600,
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".into()],
        },
    }
}

/// Router wired to in-memory repositories; one store backs both ports.
pub fn build_test_server() -> TestServer {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), store, test_config());
    TestServer::new(routes::create_router(state)).expect("test server should build")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub async fn register(server: &TestServer, name: &str, email: &str, role: &str) {
    let response = server
        .post("/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": "Password#123",
            "role": role,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
}

pub async fn login(server: &TestServer, email: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({
            "email": email,
            "password": "Password#123",
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["data"]["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Register + login in one step, returning the token.
pub async fn signup(server: &TestServer, name: &str, email: &str, role: &str) -> String {
    register(server, name, email, role).await;
    login(server, email).await
}

pub async fn create_job(server: &TestServer, token: &str, title: &str) -> String {
    let response = server
        .post("/jobs")
        .add_header("Authorization", bearer(token))
        .json(&json!({
            "title": title,
            "description": "Ship features and fix bugs",
            "company": "Acme",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["id"]
        .as_str()
        .expect("created job has an id")
        .to_string()
}
