//! Smoking statistics service
//!
//! Thin orchestration over the pure calculation code in the shared crate:
//! load the profile, evaluate at the current instant, attach the
//! motivational message.

use crate::error::ApiError;
use crate::services::UserService;
use chrono::{DateTime, Utc};
use quitt_shared::types::StatisticsResponse;
use quitt_shared::{calculate_smoking_statistics, motivational_message};
use sqlx::PgPool;
use uuid::Uuid;

/// Statistics service
pub struct StatsService;

impl StatsService {
    /// Compute current smoking statistics for a user
    pub async fn get_statistics(
        pool: &PgPool,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<StatisticsResponse, ApiError> {
        let profile = UserService::require_smoking_profile(pool, user_id).await?;

        let statistics = calculate_smoking_statistics(&profile, now);
        let message = motivational_message(statistics.days_since_quit);

        Ok(StatisticsResponse {
            statistics,
            motivational_message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
