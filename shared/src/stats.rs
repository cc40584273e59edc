//! Smoking statistics calculations module
//!
//! Derives all smoke-free statistics (days quit, money saved, cigarettes
//! avoided, health recovery, next milestone) from a [`SmokingProfile`] and
//! an explicit point in time.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Injectable Clock**: "now" is always a parameter, never read ad hoc
//! 3. **Total**: No failure modes for profiles satisfying the model invariants
//! 4. **No Rounding**: Money stays exact; formatting is a presentation concern

use crate::models::SmokingProfile;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Derived Statistics Types
// ============================================================================

/// All statistics derived from a smoking profile at a given moment.
///
/// Recomputed on every read, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokingStatistics {
    /// Whole days since the quit date, clamped at zero
    pub days_since_quit: i64,
    /// Cigarettes avoided since quitting
    pub cigarettes_not_smoked: i64,
    /// Money saved since quitting, in euros (unrounded)
    pub money_saved: f64,
    /// Years the user smoked before quitting
    pub years_smoked: i32,
    /// Estimated lifetime cigarettes smoked (flat 365-day years)
    pub total_cigarettes_smoked: i64,
    /// Estimated lifetime money spent on smoking, in euros
    pub total_money_spent: f64,
    /// Health recovery catalog with achievement flags, in catalog order
    pub health_improvements: Vec<HealthImprovement>,
    /// The nearest milestone still ahead, None once all are reached
    pub next_milestone: Option<Milestone>,
}

/// A health recovery entry from the fixed catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthImprovement {
    pub timeframe: String,
    pub description: String,
    pub days_required: f64,
    pub achieved: bool,
}

/// A named day-count target still ahead of the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub description: String,
    pub days_required: i64,
    pub days_remaining: i64,
}

// ============================================================================
// Fixed Catalogs
// ============================================================================

struct HealthImprovementDef {
    timeframe: &'static str,
    description: &'static str,
    days_required: f64,
}

/// Health recovery catalog, ordered by threshold.
///
/// Thresholds follow the established cessation timeline, from 20 minutes
/// (~0.014 days) to 15 years.
const HEALTH_IMPROVEMENTS: [HealthImprovementDef; 9] = [
    HealthImprovementDef {
        timeframe: "20 minutes",
        description: "Heart rate and blood pressure return to normal",
        days_required: 0.014,
    },
    HealthImprovementDef {
        timeframe: "12 hours",
        description: "Carbon monoxide level in the blood drops to normal",
        days_required: 0.5,
    },
    HealthImprovementDef {
        timeframe: "2 weeks",
        description: "Circulation improves and lung function increases",
        days_required: 14.0,
    },
    HealthImprovementDef {
        timeframe: "1 month",
        description: "Coughing and shortness of breath decrease",
        days_required: 30.0,
    },
    HealthImprovementDef {
        timeframe: "3 months",
        description: "Cilia in the lungs regenerate",
        days_required: 90.0,
    },
    HealthImprovementDef {
        timeframe: "1 year",
        description: "Risk of coronary heart disease is cut in half",
        days_required: 365.0,
    },
    HealthImprovementDef {
        timeframe: "5 years",
        description: "Stroke risk drops to that of a non-smoker",
        days_required: 365.0 * 5.0,
    },
    HealthImprovementDef {
        timeframe: "10 years",
        description: "Lung cancer risk is cut in half",
        days_required: 365.0 * 10.0,
    },
    HealthImprovementDef {
        timeframe: "15 years",
        description: "Heart disease risk matches that of a non-smoker",
        days_required: 365.0 * 15.0,
    },
];

struct MilestoneDef {
    name: &'static str,
    description: &'static str,
    days_required: i64,
}

/// Named day-count targets, ordered by threshold
const MILESTONES: [MilestoneDef; 8] = [
    MilestoneDef {
        name: "1 day",
        description: "The first day without a cigarette!",
        days_required: 1,
    },
    MilestoneDef {
        name: "1 week",
        description: "A whole week smoke-free!",
        days_required: 7,
    },
    MilestoneDef {
        name: "1 month",
        description: "An entire month without cigarettes!",
        days_required: 30,
    },
    MilestoneDef {
        name: "3 months",
        description: "Three months smoke-free, a major achievement!",
        days_required: 90,
    },
    MilestoneDef {
        name: "6 months",
        description: "Half a year done!",
        days_required: 180,
    },
    MilestoneDef {
        name: "1 year",
        description: "A full year smoke-free, fantastic!",
        days_required: 365,
    },
    MilestoneDef {
        name: "2 years",
        description: "Two years without cigarettes!",
        days_required: 365 * 2,
    },
    MilestoneDef {
        name: "5 years",
        description: "Five years smoke-free, a new life!",
        days_required: 365 * 5,
    },
];

// ============================================================================
// Calculations
// ============================================================================

/// Whole days elapsed since the quit date, clamped at zero.
///
/// A quit date in the future yields 0, not a negative count.
pub fn days_since_quit(profile: &SmokingProfile, now: DateTime<Utc>) -> i64 {
    (now - profile.quit_date).num_days().max(0)
}

/// Price of a single cigarette, in euros
pub fn price_per_cigarette(profile: &SmokingProfile) -> f64 {
    profile.price_per_pack / f64::from(profile.cigarettes_per_pack)
}

/// Calculate the complete statistics snapshot for a profile at `now`.
///
/// Misconfigured inputs (e.g. a start year after `now`) produce numerically
/// odd but well-defined outputs; validating them is the caller's concern.
pub fn calculate_smoking_statistics(
    profile: &SmokingProfile,
    now: DateTime<Utc>,
) -> SmokingStatistics {
    let days = days_since_quit(profile, now);
    let cost_per_cigarette = price_per_cigarette(profile);

    let cigarettes_not_smoked = days * i64::from(profile.cigarettes_per_day);
    let money_saved = cigarettes_not_smoked as f64 * cost_per_cigarette;

    let years_smoked = now.year() - profile.smoking_start_year;
    let total_cigarettes_smoked =
        i64::from(years_smoked) * 365 * i64::from(profile.cigarettes_per_day);
    let total_money_spent = total_cigarettes_smoked as f64 * cost_per_cigarette;

    let health_improvements = HEALTH_IMPROVEMENTS
        .iter()
        .map(|def| HealthImprovement {
            timeframe: def.timeframe.to_string(),
            description: def.description.to_string(),
            days_required: def.days_required,
            achieved: days as f64 >= def.days_required,
        })
        .collect();

    let next_milestone = MILESTONES
        .iter()
        .filter(|def| def.days_required > days)
        .min_by_key(|def| def.days_required)
        .map(|def| Milestone {
            name: def.name.to_string(),
            description: def.description.to_string(),
            days_required: def.days_required,
            days_remaining: def.days_required - days,
        });

    SmokingStatistics {
        days_since_quit: days,
        cigarettes_not_smoked,
        money_saved,
        years_smoked,
        total_cigarettes_smoked,
        total_money_spent,
        health_improvements,
        next_milestone,
    }
}

/// Encouragement matching how far along the user is
pub fn motivational_message(days_since_quit: i64) -> &'static str {
    if days_since_quit == 0 {
        "Today is the day! You can do this!"
    } else if days_since_quit < 7 {
        "Great! Every day counts. Stay strong!"
    } else if days_since_quit < 30 {
        "Fantastic! You are well on your way!"
    } else if days_since_quit < 90 {
        "Incredible! You have already achieved so much!"
    } else if days_since_quit < 365 {
        "Wow! You have become a true non-smoker!"
    } else {
        "Congratulations! You are a role model for others!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn test_profile() -> SmokingProfile {
        SmokingProfile {
            cigarettes_per_day: 20,
            smoking_start_year: 2010,
            quit_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            price_per_pack: 7.0,
            cigarettes_per_pack: 20,
            reasons_to_quit: vec!["health".to_string()],
            health_goals: None,
            previous_quit_attempts: 2,
            motivation_level: 4,
        }
    }

    #[test]
    fn test_ten_day_example_scenario() {
        // 20/day at 7.00 EUR per 20-pack = 0.35 EUR per cigarette
        let profile = test_profile();
        let now = profile.quit_date + Duration::days(10);

        let stats = calculate_smoking_statistics(&profile, now);

        assert_eq!(stats.days_since_quit, 10);
        assert_eq!(stats.cigarettes_not_smoked, 200);
        assert!((stats.money_saved - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_future_quit_date_clamps_to_zero() {
        let profile = test_profile();
        let now = profile.quit_date - Duration::days(30);

        let stats = calculate_smoking_statistics(&profile, now);

        assert_eq!(stats.days_since_quit, 0);
        assert_eq!(stats.cigarettes_not_smoked, 0);
        assert_eq!(stats.money_saved, 0.0);
    }

    #[test]
    fn test_health_improvements_catalog_shape() {
        let profile = test_profile();
        let stats = calculate_smoking_statistics(&profile, profile.quit_date);

        assert_eq!(stats.health_improvements.len(), 9);
        // Catalog order must be preserved: thresholds ascend
        for pair in stats.health_improvements.windows(2) {
            assert!(pair[0].days_required < pair[1].days_required);
        }
        assert_eq!(stats.health_improvements[0].days_required, 0.014);
        assert_eq!(stats.health_improvements[8].days_required, 5475.0);
    }

    #[test]
    fn test_health_improvements_achieved_at_day_one() {
        let profile = test_profile();
        let now = profile.quit_date + Duration::days(1);

        let stats = calculate_smoking_statistics(&profile, now);

        // 20 minutes and 12 hours are passed, 2 weeks is not
        assert!(stats.health_improvements[0].achieved);
        assert!(stats.health_improvements[1].achieved);
        assert!(!stats.health_improvements[2].achieved);
    }

    #[test]
    fn test_day_zero_achieves_no_improvements() {
        let profile = test_profile();
        let stats = calculate_smoking_statistics(&profile, profile.quit_date);

        assert!(stats.health_improvements.iter().all(|h| !h.achieved));
    }

    #[test]
    fn test_next_milestone_progression() {
        let profile = test_profile();

        let stats = calculate_smoking_statistics(&profile, profile.quit_date);
        let first = stats.next_milestone.unwrap();
        assert_eq!(first.days_required, 1);
        assert_eq!(first.days_remaining, 1);

        let now = profile.quit_date + Duration::days(10);
        let next = calculate_smoking_statistics(&profile, now)
            .next_milestone
            .unwrap();
        assert_eq!(next.days_required, 30);
        assert_eq!(next.days_remaining, 20);
    }

    #[test]
    fn test_next_milestone_terminal_state() {
        let profile = test_profile();

        let now = profile.quit_date + Duration::days(1824);
        let stats = calculate_smoking_statistics(&profile, now);
        assert_eq!(stats.next_milestone.unwrap().days_required, 1825);

        let now = profile.quit_date + Duration::days(1825);
        let stats = calculate_smoking_statistics(&profile, now);
        assert!(stats.next_milestone.is_none());
    }

    #[test]
    fn test_historical_totals() {
        let profile = test_profile();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let stats = calculate_smoking_statistics(&profile, now);

        assert_eq!(stats.years_smoked, 14);
        assert_eq!(stats.total_cigarettes_smoked, 14 * 365 * 20);
        assert!((stats.total_money_spent - (14 * 365 * 20) as f64 * 0.35).abs() < 1e-6);
    }

    #[rstest::rstest]
    #[case(0, "Today is the day! You can do this!")]
    #[case(3, "Great! Every day counts. Stay strong!")]
    #[case(15, "Fantastic! You are well on your way!")]
    #[case(45, "Incredible! You have already achieved so much!")]
    #[case(200, "Wow! You have become a true non-smoker!")]
    #[case(400, "Congratulations! You are a role model for others!")]
    fn test_motivational_message_buckets(#[case] days: i64, #[case] expected: &str) {
        assert_eq!(motivational_message(days), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: days since quit is non-negative for any offset
        #[test]
        fn prop_days_never_negative(offset_days in -3650i64..3650) {
            let profile = test_profile();
            let now = profile.quit_date + Duration::days(offset_days);
            prop_assert!(days_since_quit(&profile, now) >= 0);
        }

        /// Property: days since quit is monotonically non-decreasing in now
        #[test]
        fn prop_days_monotonic(a in -1000i64..3650, b in 0i64..1000) {
            let profile = test_profile();
            let earlier = profile.quit_date + Duration::days(a);
            let later = earlier + Duration::days(b);
            prop_assert!(days_since_quit(&profile, later) >= days_since_quit(&profile, earlier));
        }

        /// Property: money saved equals cigarettes avoided times unit price, exactly
        #[test]
        fn prop_money_saved_exact(
            days in 0i64..3650,
            per_day in 1u32..80,
            price in 1.0f64..20.0,
            per_pack in 1u32..40
        ) {
            let mut profile = test_profile();
            profile.cigarettes_per_day = per_day;
            profile.price_per_pack = price;
            profile.cigarettes_per_pack = per_pack;
            let now = profile.quit_date + Duration::days(days);

            let stats = calculate_smoking_statistics(&profile, now);
            let expected = stats.cigarettes_not_smoked as f64 * (price / f64::from(per_pack));
            prop_assert_eq!(stats.money_saved, expected);
        }

        /// Property: the catalog always yields exactly 9 entries, and the next
        /// milestone is absent exactly once 5 years are reached
        #[test]
        fn prop_catalog_invariants(days in 0i64..4000) {
            let profile = test_profile();
            let now = profile.quit_date + Duration::days(days);
            let stats = calculate_smoking_statistics(&profile, now);

            prop_assert_eq!(stats.health_improvements.len(), 9);
            prop_assert_eq!(stats.next_milestone.is_none(), days >= 1825);
            if let Some(m) = stats.next_milestone {
                prop_assert!(m.days_required > days);
                prop_assert_eq!(m.days_remaining, m.days_required - days);
            }
        }
    }
}
