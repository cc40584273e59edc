//! Gamification state repository
//!
//! The full gamification payload (achievements, streak, level, rewards) is
//! stored as a single JSONB document per user. Purchases use a
//! `SELECT ... FOR UPDATE` read so concurrent requests for the same user
//! serialize on the row lock.

use anyhow::Result;
use chrono::{DateTime, Utc};
use quitt_shared::GamificationData;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Gamification state record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GamificationRecord {
    pub user_id: Uuid,
    pub data: Json<GamificationData>,
    pub updated_at: DateTime<Utc>,
}

/// Gamification repository for database operations
pub struct GamificationRepository;

impl GamificationRepository {
    /// Get a user's gamification state, if any
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<Option<GamificationData>> {
        let record = sqlx::query_as::<_, GamificationRecord>(
            r#"
            SELECT user_id, data, updated_at
            FROM gamification_state
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record.map(|r| r.data.0))
    }

    /// Get a user's gamification state with a row lock
    ///
    /// Must run inside a transaction; the lock is held until commit.
    pub async fn get_for_update(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Option<GamificationData>> {
        let record = sqlx::query_as::<_, GamificationRecord>(
            r#"
            SELECT user_id, data, updated_at
            FROM gamification_state
            WHERE user_id = $1
            FOR UPDATE
            "#,
        )
        .bind(user_id)
        .fetch_optional(conn)
        .await?;

        Ok(record.map(|r| r.data.0))
    }

    /// Insert or replace a user's gamification state
    pub async fn upsert(pool: &PgPool, user_id: Uuid, data: &GamificationData) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO gamification_state (user_id, data)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(Json(data))
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert or replace a user's gamification state on a given connection
    pub async fn upsert_with(
        conn: &mut PgConnection,
        user_id: Uuid,
        data: &GamificationData,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO gamification_state (user_id, data)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(Json(data))
        .execute(conn)
        .await?;

        Ok(())
    }
}
