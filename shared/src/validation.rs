//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! The core calculators stay total functions; everything here runs at the
//! API boundary before data reaches them.

use crate::models::SmokingProfile;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if !email.contains('@') || !email.contains('.') {
        return Err("Invalid email format".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    // Basic email regex check
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a person name field
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate craving intensity (1-10)
pub fn validate_craving_intensity(intensity: i32) -> Result<(), String> {
    if !(1..=10).contains(&intensity) {
        return Err("Intensity must be between 1 and 10".to_string());
    }
    Ok(())
}

/// Validate craving duration in minutes
pub fn validate_duration_minutes(minutes: i32) -> Result<(), String> {
    if minutes < 0 {
        return Err("Duration cannot be negative".to_string());
    }
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

// ============================================================================
// Smoking Profile Validation
// ============================================================================

/// Validate a full smoking profile.
///
/// The statistics calculator deliberately accepts anything (it is a total
/// function); this gate keeps nonsense like a zero pack size out of
/// storage in the first place.
pub fn validate_smoking_profile(profile: &SmokingProfile) -> Result<(), String> {
    if profile.cigarettes_per_day == 0 {
        return Err("Cigarettes per day must be at least 1".to_string());
    }
    if profile.cigarettes_per_day > 200 {
        return Err("Cigarettes per day unreasonably high".to_string());
    }
    if profile.cigarettes_per_pack == 0 {
        return Err("Cigarettes per pack must be at least 1".to_string());
    }
    if !(profile.price_per_pack > 0.0) || !profile.price_per_pack.is_finite() {
        return Err("Price per pack must be a positive number".to_string());
    }
    if profile.price_per_pack > 100.0 {
        return Err("Price per pack unreasonably high".to_string());
    }
    if !(1900..=2100).contains(&profile.smoking_start_year) {
        return Err("Smoking start year out of range".to_string());
    }
    if profile.reasons_to_quit.is_empty()
        || profile.reasons_to_quit.iter().all(|r| r.trim().is_empty())
    {
        return Err("At least one reason to quit is required".to_string());
    }
    if !(1..=5).contains(&profile.motivation_level) {
        return Err("Motivation level must be between 1 and 5".to_string());
    }
    Ok(())
}
