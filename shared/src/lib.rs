//! Quitt Shared Library
//!
//! This crate contains the pure computation core of the Quitt
//! smoking-cessation tracker: derived statistics, the gamification engine
//! (achievements, streaks, levels, virtual rewards) and the shared API
//! types and validation used by the backend.
//!
//! Every calculation takes the current time as an explicit parameter, so
//! callers inject a fixed clock in tests and wall-clock time in
//! production.

pub mod cravings;
pub mod format;
pub mod gamification;
pub mod models;
pub mod stats;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use gamification::{
    initialize_gamification, purchase_reward, refresh_gamification, GamificationData,
    PurchaseError,
};
pub use models::SmokingProfile;
pub use stats::{calculate_smoking_statistics, motivational_message, SmokingStatistics};
pub use types::*;
