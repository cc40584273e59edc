//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod craving;
pub mod gamification;
pub mod user;

pub use craving::{CravingRepository, CreateCravingEntry};
pub use gamification::GamificationRepository;
pub use user::{SmokingProfileRecord, UserRepository};
