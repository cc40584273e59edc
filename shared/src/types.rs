//! API request and response types

use crate::models::SmokingProfile;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request: account data plus the initial smoking profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub smoking_profile: SmokingProfile,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub smoking_profile: SmokingProfile,
    pub created_at: DateTime<Utc>,
}

/// Smoking profile replacement request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub smoking_profile: SmokingProfile,
}

// ============================================================================
// Statistics Types
// ============================================================================

/// Statistics response wrapper: the derived numbers plus a message for the
/// dashboard header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsResponse {
    #[serde(flatten)]
    pub statistics: crate::stats::SmokingStatistics,
    pub motivational_message: String,
}

// ============================================================================
// Gamification Types
// ============================================================================

/// Successful reward purchase response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRewardResponse {
    pub message: String,
    pub gamification: crate::gamification::GamificationData,
}

// ============================================================================
// Craving Types
// ============================================================================

/// Log a craving episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogCravingRequest {
    /// Intensity on a 1-10 scale
    pub intensity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coping_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Craving history query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CravingHistoryQuery {
    /// Maximum entries to return (default 50)
    #[serde(default)]
    pub limit: Option<i64>,
    /// How many days back to look (default 30)
    #[serde(default)]
    pub days: Option<i64>,
}

/// Aggregated craving statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CravingStatsResponse {
    pub cravings_today: i64,
    pub cravings_this_week: i64,
    /// Average intensity today, rounded to one decimal
    pub avg_intensity_today: f64,
    /// Most frequent triggers over the last 7 days, descending
    pub top_triggers: Vec<TriggerCount>,
    /// Daily average intensity over the last 7 days, ascending by date
    pub intensity_trend: Vec<DailyIntensity>,
    /// Cravings per hour of day over the last 30 days
    pub time_pattern: Vec<HourlyPattern>,
}

/// Trigger frequency entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerCount {
    pub trigger: String,
    pub count: i64,
}

/// Per-day intensity aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyIntensity {
    pub date: NaiveDate,
    pub avg_intensity: f64,
    pub count: i64,
}

/// Per-hour craving aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyPattern {
    pub hour: i32,
    pub count: i64,
    pub avg_intensity: f64,
}
