//! User repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use quitt_shared::SmokingProfile;
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Smoking profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SmokingProfileRecord {
    pub user_id: Uuid,
    pub cigarettes_per_day: i32,
    pub smoking_start_year: i32,
    pub quit_date: DateTime<Utc>,
    pub price_per_pack: f64,
    pub cigarettes_per_pack: i32,
    pub reasons_to_quit: Vec<String>,
    pub health_goals: Option<String>,
    pub previous_quit_attempts: i32,
    pub motivation_level: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<SmokingProfileRecord> for SmokingProfile {
    fn from(record: SmokingProfileRecord) -> Self {
        SmokingProfile {
            cigarettes_per_day: record.cigarettes_per_day as u32,
            smoking_start_year: record.smoking_start_year,
            quit_date: record.quit_date,
            price_per_pack: record.price_per_pack,
            cigarettes_per_pack: record.cigarettes_per_pack as u32,
            reasons_to_quit: record.reasons_to_quit,
            health_goals: record.health_goals,
            previous_quit_attempts: record.previous_quit_attempts as u32,
            motivation_level: record.motivation_level as u8,
        }
    }
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user together with their smoking profile
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
        profile: &SmokingProfile,
    ) -> Result<UserRecord> {
        let mut tx = pool.begin().await?;

        // Insert user
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&mut *tx)
        .await?;

        // Insert smoking profile
        sqlx::query(
            r#"
            INSERT INTO smoking_profiles (
                user_id, cigarettes_per_day, smoking_start_year, quit_date,
                price_per_pack, cigarettes_per_pack, reasons_to_quit,
                health_goals, previous_quit_attempts, motivation_level
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.id)
        .bind(profile.cigarettes_per_day as i32)
        .bind(profile.smoking_start_year)
        .bind(profile.quit_date)
        .bind(profile.price_per_pack)
        .bind(profile.cigarettes_per_pack as i32)
        .bind(&profile.reasons_to_quit)
        .bind(&profile.health_goals)
        .bind(profile.previous_quit_attempts as i32)
        .bind(profile.motivation_level as i32)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Get a user's smoking profile
    pub async fn get_smoking_profile(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<SmokingProfileRecord>> {
        let profile = sqlx::query_as::<_, SmokingProfileRecord>(
            r#"
            SELECT user_id, cigarettes_per_day, smoking_start_year, quit_date,
                   price_per_pack, cigarettes_per_pack, reasons_to_quit,
                   health_goals, previous_quit_attempts, motivation_level, updated_at
            FROM smoking_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    /// Replace a user's smoking profile
    pub async fn update_smoking_profile(
        pool: &PgPool,
        user_id: Uuid,
        profile: &SmokingProfile,
    ) -> Result<SmokingProfileRecord> {
        let record = sqlx::query_as::<_, SmokingProfileRecord>(
            r#"
            UPDATE smoking_profiles SET
                cigarettes_per_day = $2,
                smoking_start_year = $3,
                quit_date = $4,
                price_per_pack = $5,
                cigarettes_per_pack = $6,
                reasons_to_quit = $7,
                health_goals = $8,
                previous_quit_attempts = $9,
                motivation_level = $10,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING user_id, cigarettes_per_day, smoking_start_year, quit_date,
                      price_per_pack, cigarettes_per_pack, reasons_to_quit,
                      health_goals, previous_quit_attempts, motivation_level, updated_at
            "#,
        )
        .bind(user_id)
        .bind(profile.cigarettes_per_day as i32)
        .bind(profile.smoking_start_year)
        .bind(profile.quit_date)
        .bind(profile.price_per_pack)
        .bind(profile.cigarettes_per_pack as i32)
        .bind(&profile.reasons_to_quit)
        .bind(&profile.health_goals)
        .bind(profile.previous_quit_attempts as i32)
        .bind(profile.motivation_level as i32)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}
