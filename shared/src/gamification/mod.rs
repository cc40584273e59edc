//! Gamification engine
//!
//! Layers achievements, streaks, XP/levels and a virtual reward store on
//! top of the smoking statistics. Everything is a pure reducer over owned
//! state: `(previous, profile, now) -> new state`. Time-derived fields are
//! recomputed on every refresh while purchase history and unlock
//! timestamps are carried over untouched, which makes the refresh
//! idempotent for a fixed `now` (apart from the documented streak-history
//! append).

pub mod achievements;
pub mod level;
pub mod rewards;
pub mod streak;

pub use achievements::{
    update_achievements, Achievement, AchievementCategory, AchievementTier, RequirementUnit,
    ACHIEVEMENT_DEFINITIONS,
};
pub use level::{
    calculate_current_level, calculate_daily_xp, calculate_total_xp, LevelSystem,
    LEVEL_THRESHOLDS,
};
pub use rewards::{
    purchase_reward, seed_reward_catalog, PurchaseError, RewardCategory, VirtualReward,
    VIRTUAL_REWARD_DEFINITIONS,
};
pub use streak::{update_streak, StreakData, STREAK_MILESTONES};

use crate::models::SmokingProfile;
use crate::stats::calculate_smoking_statistics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full gamification snapshot for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamificationData {
    pub achievements: Vec<Achievement>,
    pub streak: StreakData,
    pub level: LevelSystem,
    pub virtual_rewards: Vec<VirtualReward>,
    /// Number of rewards purchased so far
    pub total_rewards_earned: u32,
    /// Saved money already spent on rewards, in euros
    pub total_money_spent: f64,
    pub last_activity_date: DateTime<Utc>,
}

/// Produce a fresh, consistent snapshot from the profile and prior state.
///
/// With no previous data everything is derived from scratch and the reward
/// catalog is seeded unpurchased. With previous data the time-derived
/// fields (achievements, streak, level) are recomputed against the prior
/// state as history, while rewards and spend totals pass through
/// unchanged.
pub fn refresh_gamification(
    profile: &SmokingProfile,
    previous: Option<&GamificationData>,
    now: DateTime<Utc>,
) -> GamificationData {
    let stats = calculate_smoking_statistics(profile, now);
    let days = stats.days_since_quit;

    let total_xp = calculate_total_xp(days);
    let level = calculate_current_level(total_xp);
    let streak = update_streak(previous.map(|p| &p.streak), days, now);
    let achievements = update_achievements(
        previous.map_or(&[][..], |p| &p.achievements),
        days,
        stats.money_saved,
        stats.cigarettes_not_smoked,
        days,
        now,
    );

    GamificationData {
        achievements,
        streak,
        level,
        virtual_rewards: previous
            .map_or_else(seed_reward_catalog, |p| p.virtual_rewards.clone()),
        total_rewards_earned: previous.map_or(0, |p| p.total_rewards_earned),
        total_money_spent: previous.map_or(0.0, |p| p.total_money_spent),
        last_activity_date: now,
    }
}

/// First-access initialization, seeded from the profile alone
pub fn initialize_gamification(profile: &SmokingProfile, now: DateTime<Utc>) -> GamificationData {
    refresh_gamification(profile, None, now)
}
