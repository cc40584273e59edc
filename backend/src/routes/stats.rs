//! Smoking statistics API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::StatsService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use quitt_shared::types::StatisticsResponse;

/// Create statistics routes
pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/", get(get_statistics))
}

/// GET /api/v1/stats - Current smoking statistics
///
/// Everything is derived from the profile at request time; nothing here is
/// stored.
async fn get_statistics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StatisticsResponse>, ApiError> {
    let response = StatsService::get_statistics(state.db(), auth.user_id, Utc::now()).await?;
    Ok(Json(response))
}
