//! Coping-strategy toolkit
//!
//! Static catalogs of coping strategies and distraction activities offered
//! to a user while a craving is acute, plus the filters the clients use to
//! narrow them down by time of day, location, and available time.

use serde::{Deserialize, Serialize};

/// What kind of coping strategy this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyCategory {
    Breathing,
    Physical,
    Mental,
    Social,
}

/// What kind of distraction activity this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Mindful,
    Physical,
    Creative,
    Productive,
    Social,
}

/// How demanding a strategy or activity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Coarse time-of-day buckets used to filter strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Map an hour of day (0-23) to its bucket
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// Where a distraction activity can be done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLocation {
    Home,
    Outdoor,
    Anywhere,
}

/// A technique for riding out a craving
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CopingStrategy {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: StrategyCategory,
    /// `None` means the strategy fits any time of day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    /// Rough duration in minutes
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
}

/// Something to do instead of smoking
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DistractionActivity {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ActivityCategory,
    /// Rough duration in minutes
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub location: ActivityLocation,
}

/// Activities at or under this length count as "quick"
const QUICK_ACTIVITY_MINUTES: u32 = 10;

pub const COPING_STRATEGIES: [CopingStrategy; 8] = [
    CopingStrategy {
        id: "deep-breathing",
        title: "Deep Breathing",
        description: "Breathe in slowly through your nose and out through your mouth",
        category: StrategyCategory::Breathing,
        time_of_day: None,
        duration_minutes: 5,
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "cold-water",
        title: "Drink Cold Water",
        description: "Slowly drink a large glass of cold water",
        category: StrategyCategory::Physical,
        time_of_day: None,
        duration_minutes: 3,
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "walk-around",
        title: "Short Walk",
        description: "Take a 5-10 minute walk in the fresh air",
        category: StrategyCategory::Physical,
        time_of_day: None,
        duration_minutes: 10,
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "visualization",
        title: "Positive Visualization",
        description: "Picture how proud you will be of yourself",
        category: StrategyCategory::Mental,
        time_of_day: None,
        duration_minutes: 5,
        difficulty: Difficulty::Medium,
    },
    CopingStrategy {
        id: "call-friend",
        title: "Call a Friend",
        description: "Call a supportive friend or family member",
        category: StrategyCategory::Social,
        time_of_day: None,
        duration_minutes: 15,
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "meditation",
        title: "Short Meditation",
        description: "Meditate for 5-10 minutes, guided or with an app",
        category: StrategyCategory::Mental,
        time_of_day: None,
        duration_minutes: 10,
        difficulty: Difficulty::Medium,
    },
    CopingStrategy {
        id: "hand-exercises",
        title: "Hand Exercises",
        description: "Move your hands and fingers to break the habit loop",
        category: StrategyCategory::Physical,
        time_of_day: None,
        duration_minutes: 3,
        difficulty: Difficulty::Easy,
    },
    CopingStrategy {
        id: "motivational-reminder",
        title: "Motivation Reminder",
        description: "Read through your personal reasons for quitting",
        category: StrategyCategory::Mental,
        time_of_day: None,
        duration_minutes: 2,
        difficulty: Difficulty::Easy,
    },
];

pub const DISTRACTION_ACTIVITIES: [DistractionActivity; 10] = [
    DistractionActivity {
        id: "sudoku",
        title: "Solve a Sudoku",
        description: "Solve a sudoku puzzle on your phone",
        category: ActivityCategory::Mindful,
        duration_minutes: 15,
        difficulty: Difficulty::Medium,
        location: ActivityLocation::Anywhere,
    },
    DistractionActivity {
        id: "push-ups",
        title: "Do Push-Ups",
        description: "Do 10-20 push-ups, or as many as you can",
        category: ActivityCategory::Physical,
        duration_minutes: 5,
        difficulty: Difficulty::Medium,
        location: ActivityLocation::Home,
    },
    DistractionActivity {
        id: "sketch",
        title: "Quick Sketch",
        description: "Draw something around you or from memory",
        category: ActivityCategory::Creative,
        duration_minutes: 10,
        difficulty: Difficulty::Easy,
        location: ActivityLocation::Anywhere,
    },
    DistractionActivity {
        id: "podcast",
        title: "Listen to a Podcast",
        description: "Listen to an interesting podcast or audiobook",
        category: ActivityCategory::Mindful,
        duration_minutes: 20,
        difficulty: Difficulty::Easy,
        location: ActivityLocation::Anywhere,
    },
    DistractionActivity {
        id: "organize",
        title: "Tidy Up",
        description: "Tidy a small area or organize something",
        category: ActivityCategory::Productive,
        duration_minutes: 15,
        difficulty: Difficulty::Easy,
        location: ActivityLocation::Home,
    },
    DistractionActivity {
        id: "text-friend",
        title: "Send a Message",
        description: "Write to someone you have not spoken to in a while",
        category: ActivityCategory::Social,
        duration_minutes: 10,
        difficulty: Difficulty::Easy,
        location: ActivityLocation::Anywhere,
    },
    DistractionActivity {
        id: "stretching",
        title: "Stretching",
        description: "Do some stretching exercises or yoga poses",
        category: ActivityCategory::Physical,
        duration_minutes: 10,
        difficulty: Difficulty::Easy,
        location: ActivityLocation::Anywhere,
    },
    DistractionActivity {
        id: "journal",
        title: "Write in a Journal",
        description: "Write down your thoughts and feelings",
        category: ActivityCategory::Mindful,
        duration_minutes: 15,
        difficulty: Difficulty::Easy,
        location: ActivityLocation::Anywhere,
    },
    DistractionActivity {
        id: "music",
        title: "Listen to Music",
        description: "Play your favorite music or discover new songs",
        category: ActivityCategory::Mindful,
        duration_minutes: 15,
        difficulty: Difficulty::Easy,
        location: ActivityLocation::Anywhere,
    },
    DistractionActivity {
        id: "learn-something",
        title: "Learn Something New",
        description: "Watch a short educational video or read an interesting article",
        category: ActivityCategory::Productive,
        duration_minutes: 20,
        difficulty: Difficulty::Medium,
        location: ActivityLocation::Anywhere,
    },
];

/// Coping strategies that fit the given time of day.
///
/// Strategies bound to no particular time always match.
pub fn coping_strategies_for(time_of_day: TimeOfDay) -> Vec<CopingStrategy> {
    COPING_STRATEGIES
        .iter()
        .filter(|s| s.time_of_day.map_or(true, |t| t == time_of_day))
        .copied()
        .collect()
}

/// Distraction activities doable at the given location.
///
/// `Anywhere` activities always match.
pub fn distraction_activities_for(location: ActivityLocation) -> Vec<DistractionActivity> {
    DISTRACTION_ACTIVITIES
        .iter()
        .filter(|a| a.location == ActivityLocation::Anywhere || a.location == location)
        .copied()
        .collect()
}

/// Distraction activities that take 10 minutes or less
pub fn quick_distraction_activities() -> Vec<DistractionActivity> {
    DISTRACTION_ACTIVITIES
        .iter()
        .filter(|a| a.duration_minutes <= QUICK_ACTIVITY_MINUTES)
        .copied()
        .collect()
}

/// Toolkit handed to a user in the middle of a craving
#[derive(Debug, Clone, Serialize)]
pub struct CravingToolkit {
    pub strategies: Vec<CopingStrategy>,
    pub activities: Vec<DistractionActivity>,
    pub quick_activities: Vec<DistractionActivity>,
}

/// Assemble the toolkit for the given time of day and location
pub fn craving_toolkit(time_of_day: TimeOfDay, location: ActivityLocation) -> CravingToolkit {
    CravingToolkit {
        strategies: coping_strategies_for(time_of_day),
        activities: distraction_activities_for(location),
        quick_activities: quick_distraction_activities(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(COPING_STRATEGIES.len(), 8);
        assert_eq!(DISTRACTION_ACTIVITIES.len(), 10);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut strategy_ids: Vec<_> = COPING_STRATEGIES.iter().map(|s| s.id).collect();
        strategy_ids.sort_unstable();
        strategy_ids.dedup();
        assert_eq!(strategy_ids.len(), COPING_STRATEGIES.len());

        let mut activity_ids: Vec<_> = DISTRACTION_ACTIVITIES.iter().map(|a| a.id).collect();
        activity_ids.sort_unstable();
        activity_ids.dedup();
        assert_eq!(activity_ids.len(), DISTRACTION_ACTIVITIES.len());
    }

    #[test]
    fn test_all_strategies_fit_any_time() {
        // The shipped catalog binds nothing to a specific time of day, so
        // every bucket sees the full list
        for time in [
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Evening,
            TimeOfDay::Night,
        ] {
            assert_eq!(coping_strategies_for(time).len(), COPING_STRATEGIES.len());
        }
    }

    #[test]
    fn test_activities_filtered_by_location() {
        // Home includes the two home-only activities plus everything doable
        // anywhere; outdoor gets only the anywhere set
        let home = distraction_activities_for(ActivityLocation::Home);
        assert_eq!(home.len(), 10);
        assert!(home.iter().any(|a| a.id == "push-ups"));

        let outdoor = distraction_activities_for(ActivityLocation::Outdoor);
        assert_eq!(outdoor.len(), 8);
        assert!(outdoor.iter().all(|a| a.location == ActivityLocation::Anywhere));
    }

    #[test]
    fn test_quick_activities_are_short() {
        let quick = quick_distraction_activities();
        assert_eq!(quick.len(), 4);
        assert!(quick.iter().all(|a| a.duration_minutes <= 10));
        assert!(quick.iter().any(|a| a.id == "push-ups"));
        assert!(quick.iter().all(|a| a.id != "podcast"));
    }

    #[rstest]
    #[case(0, TimeOfDay::Night)]
    #[case(4, TimeOfDay::Night)]
    #[case(5, TimeOfDay::Morning)]
    #[case(11, TimeOfDay::Morning)]
    #[case(12, TimeOfDay::Afternoon)]
    #[case(17, TimeOfDay::Afternoon)]
    #[case(18, TimeOfDay::Evening)]
    #[case(21, TimeOfDay::Evening)]
    #[case(22, TimeOfDay::Night)]
    fn test_time_of_day_buckets(#[case] hour: u32, #[case] expected: TimeOfDay) {
        assert_eq!(TimeOfDay::from_hour(hour), expected);
    }
}
