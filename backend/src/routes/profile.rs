//! User profile API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use quitt_shared::types::{UpdateProfileRequest, UserProfileResponse};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile - Get user profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let profile = UserService::get_profile(state.db(), auth.user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile - Replace the smoking profile
///
/// Derived statistics and gamification pick up the new profile on their
/// next read.
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let profile =
        UserService::update_profile(state.db(), auth.user_id, &req.smoking_profile).await?;
    Ok(Json(profile))
}
