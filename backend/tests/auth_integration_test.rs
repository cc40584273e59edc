//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_success() {
    let app = common::TestApp::new().await;

    let email = format!("register_test_{}@example.com", uuid::Uuid::new_v4());
    let body = common::register_body(&email);

    let (status, response) = app.post("/api/v1/auth/register", &body).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["access_token"].as_str().unwrap().is_empty());
    assert!(!response["refresh_token"].as_str().unwrap().is_empty());
    assert_eq!(response["token_type"], "Bearer");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email() {
    let app = common::TestApp::new().await;

    let email = format!("duplicate_{}@example.com", uuid::Uuid::new_v4());
    let body = common::register_body(&email);

    // First registration should succeed
    let (status, _) = app.post("/api/v1/auth/register", &body).await;
    assert_eq!(status, StatusCode::OK);

    // Second registration with same email should fail
    let (status, _) = app.post("/api/v1/auth/register", &body).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_invalid_email() {
    let app = common::TestApp::new().await;

    let body = common::register_body("not-an-email");

    let (status, _) = app.post("/api/v1/auth/register", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_invalid_profile() {
    let app = common::TestApp::new().await;

    // Motivation level out of range
    let body = json!({
        "email": format!("bad_profile_{}@example.com", uuid::Uuid::new_v4()),
        "password": "secure_password_123",
        "first_name": "Test",
        "last_name": "User",
        "smoking_profile": {
            "cigarettes_per_day": 20,
            "smoking_start_year": 2010,
            "quit_date": "2024-01-01T00:00:00Z",
            "price_per_pack": 7.0,
            "cigarettes_per_pack": 20,
            "reasons_to_quit": ["health"],
            "previous_quit_attempts": 0,
            "motivation_level": 9
        }
    });

    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success() {
    let app = common::TestApp::new().await;

    let email = format!("login_test_{}@example.com", uuid::Uuid::new_v4());
    app.register_user(&email).await;

    let login_body = json!({
        "email": email,
        "password": "secure_password_123"
    });
    let (status, response) = app.post("/api/v1/auth/login", &login_body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password() {
    let app = common::TestApp::new().await;

    let email = format!("wrong_pass_{}@example.com", uuid::Uuid::new_v4());
    app.register_user(&email).await;

    let login_body = json!({
        "email": email,
        "password": "WrongPassword123!"
    });
    let (status, _) = app.post("/api/v1/auth/login", &login_body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_nonexistent_user() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": "nonexistent@example.com",
        "password": "SomePassword123!"
    });

    let (status, _) = app.post("/api/v1/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_refresh_token() {
    let app = common::TestApp::new().await;

    let email = format!("refresh_{}@example.com", uuid::Uuid::new_v4());
    let (status, response) = app
        .post("/api/v1/auth/register", &common::register_body(&email))
        .await;
    assert_eq!(status, StatusCode::OK);

    let tokens: serde_json::Value = serde_json::from_str(&response).unwrap();
    let body = json!({
        "refresh_token": tokens["refresh_token"]
    });

    let (status, response) = app.post("/api/v1/auth/refresh", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_refresh_token_invalid() {
    let app = common::TestApp::new().await;

    let body = json!({
        "refresh_token": "invalid-token"
    });

    let (status, _) = app.post("/api/v1/auth/refresh", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_returns_smoking_profile() {
    let app = common::TestApp::new().await;

    let email = format!("me_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email).await;

    let (status, response) = app.get_auth("/api/v1/auth/me", &token).await;

    assert_eq!(status, StatusCode::OK);

    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["email"], email);
    assert_eq!(profile["smoking_profile"]["cigarettes_per_day"], 20);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_protected_endpoint_with_invalid_token() {
    let app = common::TestApp::new().await;

    let fake_token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIiwiZXhwIjoxfQ.invalid";

    let (status, _) = app.get_auth("/api/v1/profile", fake_token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
