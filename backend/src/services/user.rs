//! User service for authentication and profile management
//!
//! Password hashing and verification run on the blocking thread pool;
//! the JWT service carries pre-computed keys.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use quitt_shared::types::{AuthTokens, RegisterRequest, UserProfileResponse};
use quitt_shared::validation::{validate_name, validate_password, validate_smoking_profile};
use quitt_shared::SmokingProfile;
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user with their smoking profile
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        request: &RegisterRequest,
    ) -> Result<AuthTokens, ApiError> {
        // Validate email format
        if !request.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        validate_password(&request.password).map_err(ApiError::Validation)?;
        validate_name(&request.first_name).map_err(ApiError::Validation)?;
        validate_name(&request.last_name).map_err(ApiError::Validation)?;
        validate_smoking_profile(&request.smoking_profile).map_err(ApiError::Validation)?;

        // Check if email already exists
        if UserRepository::email_exists(pool, &request.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(request.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        // Create user with profile
        let user = UserRepository::create(
            pool,
            &request.email,
            &password_hash,
            &request.first_name,
            &request.last_name,
            &request.smoking_profile,
        )
        .await
        .map_err(ApiError::Internal)?;

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        // Find user by email
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Refresh access token using refresh token
    pub async fn refresh_token(
        pool: &PgPool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        // Validate refresh token
        let claims = jwt_service
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        // Parse user ID
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        // Verify user still exists
        let _user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        Self::issue_tokens(jwt_service, user_id)
    }

    /// Get user profile with smoking profile
    pub async fn get_profile(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<UserProfileResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let profile = UserRepository::get_smoking_profile(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Smoking profile not found".to_string()))?;

        Ok(UserProfileResponse {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            smoking_profile: profile.into(),
            created_at: user.created_at,
        })
    }

    /// Replace a user's smoking profile
    pub async fn update_profile(
        pool: &PgPool,
        user_id: Uuid,
        smoking_profile: &SmokingProfile,
    ) -> Result<UserProfileResponse, ApiError> {
        validate_smoking_profile(smoking_profile).map_err(ApiError::Validation)?;

        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let updated = UserRepository::update_smoking_profile(pool, user_id, smoking_profile)
            .await
            .map_err(ApiError::Internal)?;

        Ok(UserProfileResponse {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            smoking_profile: updated.into(),
            created_at: user.created_at,
        })
    }

    /// Load a user's smoking profile or fail with 404
    pub async fn require_smoking_profile(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<SmokingProfile, ApiError> {
        let profile = UserRepository::get_smoking_profile(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Smoking profile not found".to_string()))?;

        Ok(profile.into())
    }

    fn issue_tokens(jwt_service: &JwtService, user_id: Uuid) -> Result<AuthTokens, ApiError> {
        let access_token = jwt_service
            .generate_access_token(user_id)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt_service
            .generate_refresh_token(user_id)
            .map_err(ApiError::Internal)?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
