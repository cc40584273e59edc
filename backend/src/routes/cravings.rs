//! Craving tracking API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::CravingService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Timelike, Utc};
use quitt_shared::cravings::{craving_toolkit, ActivityLocation, CravingToolkit, TimeOfDay};
use quitt_shared::models::CravingEntry;
use quitt_shared::types::{CravingHistoryQuery, CravingStatsResponse, LogCravingRequest};
use serde::Deserialize;

/// Create craving routes
pub fn craving_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_history).post(log_craving))
        .route("/stats", get(get_stats))
        .route("/toolkit", get(get_toolkit))
}

/// POST /api/v1/cravings - Record a craving episode
async fn log_craving(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogCravingRequest>,
) -> Result<Json<CravingEntry>, ApiError> {
    let entry = CravingService::log(state.db(), auth.user_id, &req, Utc::now()).await?;
    Ok(Json(entry))
}

/// GET /api/v1/cravings - Recent craving history
async fn get_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<CravingHistoryQuery>,
) -> Result<Json<Vec<CravingEntry>>, ApiError> {
    let entries = CravingService::history(state.db(), auth.user_id, &query, Utc::now()).await?;
    Ok(Json(entries))
}

/// GET /api/v1/cravings/stats - Aggregated craving statistics
async fn get_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<CravingStatsResponse>, ApiError> {
    let stats = CravingService::stats(state.db(), auth.user_id, Utc::now()).await?;
    Ok(Json(stats))
}

#[derive(Debug, Deserialize)]
struct ToolkitQuery {
    location: Option<ActivityLocation>,
}

/// GET /api/v1/cravings/toolkit - Coping strategies and distraction activities
///
/// Strategies are filtered to the current time of day, activities to the
/// caller's location (defaulting to anywhere).
async fn get_toolkit(
    _auth: AuthUser,
    Query(query): Query<ToolkitQuery>,
) -> Json<CravingToolkit> {
    let time_of_day = TimeOfDay::from_hour(Utc::now().hour());
    let location = query.location.unwrap_or(ActivityLocation::Anywhere);
    Json(craving_toolkit(time_of_day, location))
}
