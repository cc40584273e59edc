//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared calculation code.

pub mod craving;
pub mod gamification;
pub mod stats;
pub mod user;

pub use craving::CravingService;
pub use gamification::GamificationService;
pub use stats::StatsService;
pub use user::UserService;
