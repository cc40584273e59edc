//! Data models for the Quitt application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's smoking history and quit plan.
///
/// This is the immutable input to every statistics and gamification
/// calculation. The quit date may lie in the future; calculators clamp
/// "days since quit" at zero in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokingProfile {
    /// Cigarettes smoked per day before quitting
    pub cigarettes_per_day: u32,
    /// Year the user started smoking
    pub smoking_start_year: i32,
    /// The moment the user quit (or plans to quit)
    pub quit_date: DateTime<Utc>,
    /// Price of one pack, in euros
    pub price_per_pack: f64,
    /// Cigarettes contained in one pack
    pub cigarettes_per_pack: u32,
    /// Personal reasons for quitting (non-empty)
    pub reasons_to_quit: Vec<String>,
    /// Free-text health goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_goals: Option<String>,
    /// Number of earlier quit attempts
    pub previous_quit_attempts: u32,
    /// Motivation on a 1 (low) to 5 (very high) scale
    pub motivation_level: u8,
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub smoking_profile: SmokingProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A logged craving episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CravingEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Craving intensity on a 1-10 scale
    pub intensity: i32,
    pub occurred_at: DateTime<Utc>,
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
