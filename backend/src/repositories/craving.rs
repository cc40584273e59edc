//! Craving entry repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use quitt_shared::models::CravingEntry;
use sqlx::PgPool;
use uuid::Uuid;

/// Craving entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CravingEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub intensity: i32,
    pub occurred_at: DateTime<Utc>,
    pub situation: Option<String>,
    pub trigger: Option<String>,
    pub location: Option<String>,
    pub emotion: Option<String>,
    pub coping_strategy: Option<String>,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

impl From<CravingEntryRecord> for CravingEntry {
    fn from(record: CravingEntryRecord) -> Self {
        CravingEntry {
            id: record.id,
            user_id: record.user_id,
            intensity: record.intensity,
            occurred_at: record.occurred_at,
            situation: record.situation,
            trigger: record.trigger,
            location: record.location,
            emotion: record.emotion,
            coping_strategy: record.coping_strategy,
            duration_minutes: record.duration_minutes,
            notes: record.notes,
        }
    }
}

/// Input for inserting a craving entry
#[derive(Debug, Clone)]
pub struct CreateCravingEntry {
    pub intensity: i32,
    pub occurred_at: DateTime<Utc>,
    pub situation: Option<String>,
    pub trigger: Option<String>,
    pub location: Option<String>,
    pub emotion: Option<String>,
    pub coping_strategy: Option<String>,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

/// Aggregated trigger count row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TriggerCountRow {
    pub trigger: String,
    pub count: i64,
}

/// Per-day intensity aggregate row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyIntensityRow {
    pub date: NaiveDate,
    pub avg_intensity: f64,
    pub count: i64,
}

/// Per-hour aggregate row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HourlyPatternRow {
    pub hour: i32,
    pub count: i64,
    pub avg_intensity: f64,
}

/// Craving repository for database operations
pub struct CravingRepository;

impl CravingRepository {
    /// Insert a new craving entry
    pub async fn insert(
        pool: &PgPool,
        user_id: Uuid,
        entry: &CreateCravingEntry,
    ) -> Result<CravingEntryRecord> {
        let record = sqlx::query_as::<_, CravingEntryRecord>(
            r#"
            INSERT INTO craving_entries (
                user_id, intensity, occurred_at, situation, trigger, location,
                emotion, coping_strategy, duration_minutes, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_id, intensity, occurred_at, situation, trigger,
                      location, emotion, coping_strategy, duration_minutes, notes
            "#,
        )
        .bind(user_id)
        .bind(entry.intensity)
        .bind(entry.occurred_at)
        .bind(&entry.situation)
        .bind(&entry.trigger)
        .bind(&entry.location)
        .bind(&entry.emotion)
        .bind(&entry.coping_strategy)
        .bind(entry.duration_minutes)
        .bind(&entry.notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List entries since a cutoff, newest first
    pub async fn list_since(
        pool: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<CravingEntryRecord>> {
        let records = sqlx::query_as::<_, CravingEntryRecord>(
            r#"
            SELECT id, user_id, intensity, occurred_at, situation, trigger,
                   location, emotion, coping_strategy, duration_minutes, notes
            FROM craving_entries
            WHERE user_id = $1 AND occurred_at >= $2
            ORDER BY occurred_at DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(since)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Count entries since a cutoff
    pub async fn count_since(pool: &PgPool, user_id: Uuid, since: DateTime<Utc>) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM craving_entries
            WHERE user_id = $1 AND occurred_at >= $2
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Average intensity of entries since a cutoff, if any exist
    pub async fn avg_intensity_since(
        pool: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Option<f64>> {
        let avg = sqlx::query_scalar::<_, Option<f64>>(
            r#"
            SELECT AVG(intensity)::double precision FROM craving_entries
            WHERE user_id = $1 AND occurred_at >= $2
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(pool)
        .await?;

        Ok(avg)
    }

    /// Most frequent triggers since a cutoff
    pub async fn top_triggers(
        pool: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<TriggerCountRow>> {
        let rows = sqlx::query_as::<_, TriggerCountRow>(
            r#"
            SELECT trigger, COUNT(*) AS count
            FROM craving_entries
            WHERE user_id = $1 AND occurred_at >= $2 AND trigger IS NOT NULL
            GROUP BY trigger
            ORDER BY count DESC, trigger ASC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(since)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Per-day average intensity since a cutoff, oldest first
    pub async fn daily_intensity(
        pool: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyIntensityRow>> {
        let rows = sqlx::query_as::<_, DailyIntensityRow>(
            r#"
            SELECT (occurred_at AT TIME ZONE 'UTC')::date AS date,
                   AVG(intensity)::double precision AS avg_intensity,
                   COUNT(*) AS count
            FROM craving_entries
            WHERE user_id = $1 AND occurred_at >= $2
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Per-hour-of-day counts since a cutoff
    pub async fn hourly_pattern(
        pool: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<HourlyPatternRow>> {
        let rows = sqlx::query_as::<_, HourlyPatternRow>(
            r#"
            SELECT EXTRACT(HOUR FROM occurred_at AT TIME ZONE 'UTC')::int AS hour,
                   COUNT(*) AS count,
                   AVG(intensity)::double precision AS avg_intensity
            FROM craving_entries
            WHERE user_id = $1 AND occurred_at >= $2
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
    // Run with: cargo test --features integration -- --ignored
}
