//! Virtual reward store
//!
//! Rewards are bought with saved money; some are gated behind a minimum
//! level. A purchase either succeeds with a fully updated state copy or is
//! rejected with one specific, user-facing reason. The checks run in a
//! fixed order so that the reported reason is deterministic.

use crate::gamification::GamificationData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What kind of reward this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    Treat,
    Experience,
    Item,
    Upgrade,
}

/// One catalog definition
#[derive(Debug, Clone, Copy)]
pub struct RewardDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: RewardCategory,
    /// Cost in euros of saved money
    pub cost: f64,
    /// Minimum level, if gated
    pub required_level: Option<u32>,
}

/// Fixed reward catalog
pub const VIRTUAL_REWARD_DEFINITIONS: [RewardDef; 8] = [
    RewardDef {
        id: "coffee-treat",
        title: "Premium Coffee",
        description: "Treat yourself to a special coffee",
        icon: "☕",
        category: RewardCategory::Treat,
        cost: 5.0,
        required_level: None,
    },
    RewardDef {
        id: "book-treat",
        title: "New Book",
        description: "An exciting book for relaxed hours",
        icon: "📚",
        category: RewardCategory::Treat,
        cost: 15.0,
        required_level: Some(2),
    },
    RewardDef {
        id: "cinema-treat",
        title: "Cinema Night",
        description: "A great movie night at the cinema",
        icon: "🎬",
        category: RewardCategory::Experience,
        cost: 12.0,
        required_level: Some(3),
    },
    RewardDef {
        id: "spa-day",
        title: "Wellness Day",
        description: "A relaxing day at the spa",
        icon: "🧘",
        category: RewardCategory::Experience,
        cost: 80.0,
        required_level: Some(5),
    },
    RewardDef {
        id: "water-bottle",
        title: "Water Bottle",
        description: "A nice bottle for drinking more water",
        icon: "🍃",
        category: RewardCategory::Item,
        cost: 20.0,
        required_level: Some(2),
    },
    RewardDef {
        id: "fitness-tracker",
        title: "Fitness Tracker",
        description: "Keep an eye on your health",
        icon: "⌚",
        category: RewardCategory::Item,
        cost: 150.0,
        required_level: Some(8),
    },
    RewardDef {
        id: "weekend-trip",
        title: "Weekend Trip",
        description: "A lovely short trip as a reward",
        icon: "🏞️",
        category: RewardCategory::Experience,
        cost: 200.0,
        required_level: Some(10),
    },
    RewardDef {
        id: "cooking-class",
        title: "Cooking Class",
        description: "Learn new, healthy recipes",
        icon: "👨‍🍳",
        category: RewardCategory::Experience,
        cost: 60.0,
        required_level: Some(4),
    },
];

/// A reward with its purchase state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualReward {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: RewardCategory,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_level: Option<u32>,
    pub is_available: bool,
    /// One-way flag
    pub is_purchased: bool,
    /// Set once on purchase, immutable afterwards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<DateTime<Utc>>,
}

impl From<&RewardDef> for VirtualReward {
    fn from(def: &RewardDef) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            category: def.category,
            cost: def.cost,
            required_level: def.required_level,
            is_available: true,
            is_purchased: false,
            purchased_at: None,
        }
    }
}

/// Seed the full catalog as unpurchased rewards
pub fn seed_reward_catalog() -> Vec<VirtualReward> {
    VIRTUAL_REWARD_DEFINITIONS.iter().map(VirtualReward::from).collect()
}

/// Why a purchase was rejected. Every variant is a recoverable, user-facing
/// reason, never a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Reward not found")]
    NotFound,
    #[error("Reward already purchased")]
    AlreadyPurchased,
    #[error("Reward not available")]
    Unavailable,
    #[error("Level {0} required")]
    LevelRequired(u32),
    #[error("Not enough saved money")]
    InsufficientFunds,
}

/// Attempt to buy a reward.
///
/// Checks run strictly in this order, first failure wins: existence,
/// already purchased, availability, level gate, funds. Funds are inclusive
/// at the boundary: `available == cost` succeeds. On success a new state is
/// returned with the reward marked purchased and the spend totals advanced;
/// nothing else changes.
pub fn purchase_reward(
    data: &GamificationData,
    reward_id: &str,
    money_saved: f64,
    now: DateTime<Utc>,
) -> Result<GamificationData, PurchaseError> {
    let reward = data
        .virtual_rewards
        .iter()
        .find(|r| r.id == reward_id)
        .ok_or(PurchaseError::NotFound)?;

    if reward.is_purchased {
        return Err(PurchaseError::AlreadyPurchased);
    }
    if !reward.is_available {
        return Err(PurchaseError::Unavailable);
    }
    if let Some(required) = reward.required_level {
        if data.level.current_level < required {
            return Err(PurchaseError::LevelRequired(required));
        }
    }

    let available_money = money_saved - data.total_money_spent;
    if available_money < reward.cost {
        return Err(PurchaseError::InsufficientFunds);
    }

    let cost = reward.cost;
    let virtual_rewards = data
        .virtual_rewards
        .iter()
        .map(|r| {
            if r.id == reward_id {
                let mut bought = r.clone();
                bought.is_purchased = true;
                bought.purchased_at = Some(now);
                bought
            } else {
                r.clone()
            }
        })
        .collect();

    Ok(GamificationData {
        virtual_rewards,
        total_rewards_earned: data.total_rewards_earned + 1,
        total_money_spent: data.total_money_spent + cost,
        last_activity_date: now,
        ..data.clone()
    })
}
