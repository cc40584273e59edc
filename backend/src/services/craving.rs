//! Craving tracking service

use crate::error::ApiError;
use crate::repositories::{CravingRepository, CreateCravingEntry};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use quitt_shared::models::CravingEntry;
use quitt_shared::types::{
    CravingHistoryQuery, CravingStatsResponse, DailyIntensity, HourlyPattern, LogCravingRequest,
    TriggerCount,
};
use quitt_shared::validation::{validate_craving_intensity, validate_duration_minutes};
use sqlx::PgPool;
use uuid::Uuid;

const DEFAULT_HISTORY_LIMIT: i64 = 50;
const MAX_HISTORY_LIMIT: i64 = 200;
const DEFAULT_HISTORY_DAYS: i64 = 30;
const TOP_TRIGGER_LIMIT: i64 = 5;

/// Craving service
pub struct CravingService;

impl CravingService {
    /// Record a craving episode
    pub async fn log(
        pool: &PgPool,
        user_id: Uuid,
        request: &LogCravingRequest,
        now: DateTime<Utc>,
    ) -> Result<CravingEntry, ApiError> {
        validate_craving_intensity(request.intensity).map_err(ApiError::Validation)?;
        if let Some(minutes) = request.duration_minutes {
            validate_duration_minutes(minutes).map_err(ApiError::Validation)?;
        }

        let entry = CreateCravingEntry {
            intensity: request.intensity,
            occurred_at: now,
            situation: request.situation.clone(),
            trigger: request.trigger.clone(),
            location: request.location.clone(),
            emotion: request.emotion.clone(),
            coping_strategy: request.coping_strategy.clone(),
            duration_minutes: request.duration_minutes,
            notes: request.notes.clone(),
        };

        let record = CravingRepository::insert(pool, user_id, &entry)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record.into())
    }

    /// List recent craving entries, newest first
    pub async fn history(
        pool: &PgPool,
        user_id: Uuid,
        query: &CravingHistoryQuery,
        now: DateTime<Utc>,
    ) -> Result<Vec<CravingEntry>, ApiError> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);
        let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS).max(1);
        let since = now - Duration::days(days);

        let records = CravingRepository::list_since(pool, user_id, since, limit)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Aggregate craving statistics: daily/weekly counts, top triggers and
    /// intensity trend over the last 7 days, and a 30-day time-of-day
    /// pattern
    pub async fn stats(
        pool: &PgPool,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<CravingStatsResponse, ApiError> {
        let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let week_ago = now - Duration::days(7);
        let month_ago = now - Duration::days(30);

        let cravings_today = CravingRepository::count_since(pool, user_id, today_start)
            .await
            .map_err(ApiError::Internal)?;
        let cravings_this_week = CravingRepository::count_since(pool, user_id, week_ago)
            .await
            .map_err(ApiError::Internal)?;
        let avg_intensity_today =
            CravingRepository::avg_intensity_since(pool, user_id, today_start)
                .await
                .map_err(ApiError::Internal)?
                .map(round_one_decimal)
                .unwrap_or(0.0);

        let top_triggers =
            CravingRepository::top_triggers(pool, user_id, week_ago, TOP_TRIGGER_LIMIT)
                .await
                .map_err(ApiError::Internal)?
                .into_iter()
                .map(|row| TriggerCount {
                    trigger: row.trigger,
                    count: row.count,
                })
                .collect();

        let intensity_trend = CravingRepository::daily_intensity(pool, user_id, week_ago)
            .await
            .map_err(ApiError::Internal)?
            .into_iter()
            .map(|row| DailyIntensity {
                date: row.date,
                avg_intensity: round_one_decimal(row.avg_intensity),
                count: row.count,
            })
            .collect();

        let time_pattern = CravingRepository::hourly_pattern(pool, user_id, month_ago)
            .await
            .map_err(ApiError::Internal)?
            .into_iter()
            .map(|row| HourlyPattern {
                hour: row.hour,
                count: row.count,
                avg_intensity: round_one_decimal(row.avg_intensity),
            })
            .collect();

        Ok(CravingStatsResponse {
            cravings_today,
            cravings_this_week,
            avg_intensity_today,
            top_triggers,
            intensity_trend,
            time_pattern,
        })
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
