//! Gamification API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::GamificationService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use quitt_shared::types::PurchaseRewardResponse;
use quitt_shared::GamificationData;

/// Create gamification routes
pub fn gamification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_gamification))
        .route("/rewards/:reward_id/purchase", post(purchase_reward))
}

/// GET /api/v1/gamification - Current gamification state
///
/// Refreshes XP, level, streak, and achievements to the current instant
/// before returning. The first call initializes the state.
async fn get_gamification(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<GamificationData>, ApiError> {
    let data = GamificationService::get(state.db(), auth.user_id, Utc::now()).await?;
    Ok(Json(data))
}

/// POST /api/v1/gamification/rewards/{reward_id}/purchase - Buy a reward
async fn purchase_reward(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(reward_id): Path<String>,
) -> Result<Json<PurchaseRewardResponse>, ApiError> {
    let response =
        GamificationService::purchase(state.db(), auth.user_id, &reward_id, Utc::now()).await?;
    Ok(Json(response))
}
