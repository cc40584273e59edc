//! Gamification service
//!
//! Recomputes the derived gamification state (XP, level, streak,
//! achievements) from the smoking profile on every read, then persists the
//! result. Purchases run inside a transaction with a row lock so two
//! concurrent purchases for the same user cannot both spend the same funds.

use crate::error::ApiError;
use crate::repositories::GamificationRepository;
use crate::services::UserService;
use chrono::{DateTime, Utc};
use quitt_shared::format::format_currency;
use quitt_shared::types::PurchaseRewardResponse;
use quitt_shared::{calculate_smoking_statistics, purchase_reward, refresh_gamification, GamificationData};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Gamification service
pub struct GamificationService;

impl GamificationService {
    /// Get a user's gamification state, refreshing it to the current instant
    ///
    /// First call for a user initializes the state from their profile.
    pub async fn get(
        pool: &PgPool,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<GamificationData, ApiError> {
        let profile = UserService::require_smoking_profile(pool, user_id).await?;

        let previous = GamificationRepository::get(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let refreshed = refresh_gamification(&profile, previous.as_ref(), now);

        GamificationRepository::upsert(pool, user_id, &refreshed)
            .await
            .map_err(ApiError::Internal)?;

        Ok(refreshed)
    }

    /// Purchase a virtual reward with saved money
    ///
    /// The state is refreshed before the purchase check so funds and level
    /// reflect the current instant.
    pub async fn purchase(
        pool: &PgPool,
        user_id: Uuid,
        reward_id: &str,
        now: DateTime<Utc>,
    ) -> Result<PurchaseRewardResponse, ApiError> {
        let profile = UserService::require_smoking_profile(pool, user_id).await?;
        let statistics = calculate_smoking_statistics(&profile, now);

        let mut tx = pool.begin().await.map_err(ApiError::Database)?;

        let previous = GamificationRepository::get_for_update(&mut *tx, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let refreshed = refresh_gamification(&profile, previous.as_ref(), now);

        let updated = purchase_reward(&refreshed, reward_id, statistics.money_saved, now)?;

        GamificationRepository::upsert_with(&mut *tx, user_id, &updated)
            .await
            .map_err(ApiError::Internal)?;

        tx.commit().await.map_err(ApiError::Database)?;

        let (title, cost) = updated
            .virtual_rewards
            .iter()
            .find(|r| r.id == reward_id)
            .map(|r| (r.title.clone(), r.cost))
            .unwrap_or_else(|| (reward_id.to_string(), 0.0));

        info!(user_id = %user_id, reward_id = %reward_id, "Reward purchased");

        Ok(PurchaseRewardResponse {
            message: format!("{} purchased for {}!", title, format_currency(cost)),
            gamification: updated,
        })
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
