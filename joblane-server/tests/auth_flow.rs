use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

use support::{bearer, build_test_server, register, signup};

#[tokio::test]
async fn register_then_login_round_trip() {
    let server = build_test_server();

    register(&server, "Ada", "ada@example.com", "employer").await;
    let response = server
        .post("/login")
        .json(&json!({
            "email": "ada@example.com",
            "password": "Password#123",
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["user"]["name"], "Ada");
    assert_eq!(body["data"]["user"]["role"], "employer");
}

#[tokio::test]
async fn duplicate_email_is_rejected_case_insensitively() {
    let server = build_test_server();

    register(&server, "Ada", "ada@example.com", "employer").await;

    let response = server
        .post("/register")
        .json(&json!({
            "name": "Imposter",
            "email": "ADA@Example.COM",
            "password": "Password#123",
            "role": "candidate",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let server = build_test_server();

    register(&server, "Ada", "ada@example.com", "candidate").await;

    let response = server
        .post("/login")
        .json(&json!({
            "email": "ada@example.com",
            "password": "not-the-password",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Unknown email looks exactly the same.
    let response = server
        .post("/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "Password#123",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn weak_registration_payloads_are_rejected() {
    let server = build_test_server();

    let response = server
        .post("/register")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "short",
            "role": "candidate",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/register")
        .json(&json!({
            "name": "Ada",
            "email": "not-an-email",
            "password": "Password#123",
            "role": "candidate",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let server = build_test_server();

    let body = json!({
        "title": "Engineer",
        "description": "Build things",
        "company": "Acme",
    });

    let response = server.post("/jobs").json(&body).await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .post("/jobs")
        .add_header("Authorization", bearer("garbage-token"))
        .json(&body)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bare_token_without_bearer_prefix_is_accepted() {
    let server = build_test_server();

    let token = signup(&server, "Acme HR", "hr@acme.com", "employer").await;

    let response = server
        .post("/jobs")
        .add_header("Authorization", token)
        .json(&json!({
            "title": "Engineer",
            "description": "Build things",
            "company": "Acme",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let server = build_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
