//! Integration tests for profile endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_profile_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/profile").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_profile_success() {
    let app = common::TestApp::new().await;

    let email = format!("profile_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email).await;

    let (status, response) = app.get_auth("/api/v1/profile", &token).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["email"], email);
    assert_eq!(response["smoking_profile"]["price_per_pack"], 7.0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_profile_changes_statistics() {
    let app = common::TestApp::new().await;

    let email = format!("profile_update_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email).await;

    let quit_date = (chrono::Utc::now() - chrono::Duration::days(10)).to_rfc3339();
    let body = json!({
        "smoking_profile": {
            "cigarettes_per_day": 10,
            "smoking_start_year": 2015,
            "quit_date": quit_date,
            "price_per_pack": 8.0,
            "cigarettes_per_pack": 20,
            "reasons_to_quit": ["family"],
            "health_goals": "run a 10k",
            "previous_quit_attempts": 2,
            "motivation_level": 5
        }
    });

    let (status, response) = app
        .put_auth("/api/v1/profile", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::OK);

    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["smoking_profile"]["cigarettes_per_day"], 10);

    // Statistics are derived, so they pick up the new profile immediately
    let (status, response) = app.get_auth("/api/v1/stats", &token).await;
    assert_eq!(status, StatusCode::OK);

    let stats: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(stats["cigarettes_not_smoked"], 100);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_profile_rejects_invalid() {
    let app = common::TestApp::new().await;

    let email = format!("profile_invalid_{}@example.com", uuid::Uuid::new_v4());
    let token = app.register_user(&email).await;

    let body = json!({
        "smoking_profile": {
            "cigarettes_per_day": 0,
            "smoking_start_year": 2015,
            "quit_date": "2024-01-01T00:00:00Z",
            "price_per_pack": 8.0,
            "cigarettes_per_pack": 20,
            "reasons_to_quit": [],
            "previous_quit_attempts": 0,
            "motivation_level": 3
        }
    });

    let (status, _) = app
        .put_auth("/api/v1/profile", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
