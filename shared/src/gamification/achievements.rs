//! Achievement catalog and unlock tracking
//!
//! Achievements are regenerated from the fixed catalog on every update;
//! only the unlock timestamp is carried over from previous state. Once set,
//! `unlocked_at` is never overwritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Achievement grouping shown in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Milestone,
    Health,
    Savings,
    Social,
    Streak,
}

/// Visual tier of an achievement badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Unit the requirement threshold is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementUnit {
    Days,
    Euros,
    Cigarettes,
    Streaks,
    Months,
}

/// One catalog definition (static metadata, no unlock state)
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub tier: AchievementTier,
    pub requirement: i64,
    pub unit: RequirementUnit,
}

/// Fixed achievement catalog
pub const ACHIEVEMENT_DEFINITIONS: [AchievementDef; 15] = [
    // Milestone achievements
    AchievementDef {
        id: "first-day",
        title: "First Day",
        description: "Made it through the first smoke-free day!",
        icon: "🌟",
        category: AchievementCategory::Milestone,
        tier: AchievementTier::Bronze,
        requirement: 1,
        unit: RequirementUnit::Days,
    },
    AchievementDef {
        id: "week-warrior",
        title: "Week Warrior",
        description: "A whole week without cigarettes!",
        icon: "🏆",
        category: AchievementCategory::Milestone,
        tier: AchievementTier::Silver,
        requirement: 7,
        unit: RequirementUnit::Days,
    },
    AchievementDef {
        id: "month-master",
        title: "Month Master",
        description: "An entire month smoke-free!",
        icon: "👑",
        category: AchievementCategory::Milestone,
        tier: AchievementTier::Gold,
        requirement: 30,
        unit: RequirementUnit::Days,
    },
    AchievementDef {
        id: "hundred-hero",
        title: "Hundred-Day Hero",
        description: "100 days without cigarettes, incredible!",
        icon: "💎",
        category: AchievementCategory::Milestone,
        tier: AchievementTier::Platinum,
        requirement: 100,
        unit: RequirementUnit::Days,
    },
    AchievementDef {
        id: "year-legend",
        title: "Year Legend",
        description: "A full year smoke-free, you are a legend!",
        icon: "🎉",
        category: AchievementCategory::Milestone,
        tier: AchievementTier::Platinum,
        requirement: 365,
        unit: RequirementUnit::Days,
    },
    // Health achievements
    AchievementDef {
        id: "breathing-better",
        title: "Breathing Better",
        description: "Your lungs are already recovering!",
        icon: "🫁",
        category: AchievementCategory::Health,
        tier: AchievementTier::Bronze,
        requirement: 3,
        unit: RequirementUnit::Days,
    },
    AchievementDef {
        id: "taste-returner",
        title: "Taste Returns",
        description: "Taste and smell are improving!",
        icon: "👅",
        category: AchievementCategory::Health,
        tier: AchievementTier::Silver,
        requirement: 14,
        unit: RequirementUnit::Days,
    },
    AchievementDef {
        id: "circulation-champion",
        title: "Circulation Champion",
        description: "Your circulation is improving!",
        icon: "❤️",
        category: AchievementCategory::Health,
        tier: AchievementTier::Gold,
        requirement: 90,
        unit: RequirementUnit::Days,
    },
    // Savings achievements
    AchievementDef {
        id: "first-euro",
        title: "First Euro",
        description: "You saved your first euro!",
        icon: "💰",
        category: AchievementCategory::Savings,
        tier: AchievementTier::Bronze,
        requirement: 1,
        unit: RequirementUnit::Euros,
    },
    AchievementDef {
        id: "fifty-saver",
        title: "50 € Saver",
        description: "50 € saved, that is something!",
        icon: "💸",
        category: AchievementCategory::Savings,
        tier: AchievementTier::Silver,
        requirement: 50,
        unit: RequirementUnit::Euros,
    },
    AchievementDef {
        id: "hundred-hero-money",
        title: "100 € Hero",
        description: "100 € saved, fantastic!",
        icon: "💎",
        category: AchievementCategory::Savings,
        tier: AchievementTier::Gold,
        requirement: 100,
        unit: RequirementUnit::Euros,
    },
    AchievementDef {
        id: "thousand-master",
        title: "1000 € Master",
        description: "1000 € saved, incredible!",
        icon: "🏦",
        category: AchievementCategory::Savings,
        tier: AchievementTier::Platinum,
        requirement: 1000,
        unit: RequirementUnit::Euros,
    },
    // Streak achievements
    AchievementDef {
        id: "streak-starter",
        title: "Streak Starter",
        description: "Your first 7-day streak!",
        icon: "🔥",
        category: AchievementCategory::Streak,
        tier: AchievementTier::Bronze,
        requirement: 7,
        unit: RequirementUnit::Streaks,
    },
    AchievementDef {
        id: "streak-keeper",
        title: "Streak Keeper",
        description: "30 days in a row, impressive!",
        icon: "⚡",
        category: AchievementCategory::Streak,
        tier: AchievementTier::Silver,
        requirement: 30,
        unit: RequirementUnit::Streaks,
    },
    AchievementDef {
        id: "streak-legend",
        title: "Streak Legend",
        description: "A 100-day streak, you are unstoppable!",
        icon: "🌟",
        category: AchievementCategory::Streak,
        tier: AchievementTier::Gold,
        requirement: 100,
        unit: RequirementUnit::Streaks,
    },
];

/// An achievement with its unlock state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: AchievementCategory,
    pub tier: AchievementTier,
    /// Threshold to unlock, in `unit`
    pub requirement: i64,
    pub unit: RequirementUnit,
    /// Progress towards the requirement, clamped to it
    pub progress: i64,
    pub is_unlocked: bool,
    /// Set once on the locked-to-unlocked transition, immutable afterwards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Regenerate the full achievement list from the catalog.
///
/// `previous` may be empty on first run. An achievement newly crossing its
/// requirement is stamped with `now`; an already-unlocked one keeps its
/// original timestamp verbatim.
pub fn update_achievements(
    previous: &[Achievement],
    days_since_quit: i64,
    money_saved: f64,
    cigarettes_not_smoked: i64,
    current_streak: i64,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    ACHIEVEMENT_DEFINITIONS
        .iter()
        .map(|def| {
            let existing = previous.iter().find(|a| a.id == def.id);

            let progress = match def.unit {
                RequirementUnit::Days => days_since_quit,
                RequirementUnit::Euros => money_saved.floor() as i64,
                RequirementUnit::Cigarettes => cigarettes_not_smoked,
                RequirementUnit::Streaks => current_streak,
                // Whole 30-day months; no catalog entry uses this yet
                RequirementUnit::Months => days_since_quit / 30,
            };

            let is_unlocked = progress >= def.requirement;
            let newly_unlocked =
                is_unlocked && !existing.map_or(false, |a| a.is_unlocked);

            Achievement {
                id: def.id.to_string(),
                title: def.title.to_string(),
                description: def.description.to_string(),
                icon: def.icon.to_string(),
                category: def.category,
                tier: def.tier,
                requirement: def.requirement,
                unit: def.unit,
                progress: progress.min(def.requirement),
                is_unlocked,
                unlocked_at: if newly_unlocked {
                    Some(now)
                } else {
                    existing.and_then(|a| a.unlocked_at)
                },
            }
        })
        .collect()
}
