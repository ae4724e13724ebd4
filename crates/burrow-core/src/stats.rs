//! Summary counters derived from a plan.
//!
//! Nothing here is cached; plans are immutable snapshots, so stats are simply
//! recomputed whenever they are read.

use serde::{Deserialize, Serialize};

use crate::models::{Day, Plan, UserProfile};

/// Completed workouts needed per level.
pub const WORKOUTS_PER_LEVEL: u32 = 3;
/// Experience granted per completed workout within a level.
pub const EXP_PER_WORKOUT: u32 = 333;
/// Experience shown at the start of every level.
pub const BASE_EXP: u32 = 250;
/// Ceiling drawn on the experience bar. Not enforced.
pub const MAX_EXP: u32 = 1000;

/// Gamified progress summary for a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    /// Exercises across all days
    pub total_workouts: u32,
    /// Exercises ticked off across all days
    pub completed_workouts: u32,
    /// Days carrying a completion timestamp
    pub completed_days: u32,
    /// Days in the plan
    pub total_days: u32,
    /// Current level, starting at 1
    pub level: u32,
    /// Experience within the current level
    pub current_exp: u32,
    /// Ceiling of the experience bar
    pub max_exp: u32,
}

impl Stats {
    /// Experience as a share of [`MAX_EXP`], in percent. Can exceed 100.
    pub fn exp_percent(&self) -> u32 {
        self.current_exp * 100 / self.max_exp
    }
}

impl From<&Plan> for Stats {
    fn from(plan: &Plan) -> Self {
        aggregate(plan)
    }
}

/// Derive the stats of a plan.
pub fn aggregate(plan: &Plan) -> Stats {
    let total_workouts = plan.days.iter().map(|d| d.exercises.len() as u32).sum();
    let completed_workouts = plan
        .days
        .iter()
        .map(|d| d.completed_exercises() as u32)
        .sum::<u32>();
    let completed_days = plan.days.iter().filter(|d| d.is_completed()).count() as u32;

    Stats {
        total_workouts,
        completed_workouts,
        completed_days,
        total_days: plan.len() as u32,
        level: completed_workouts / WORKOUTS_PER_LEVEL + 1,
        current_exp: (completed_workouts % WORKOUTS_PER_LEVEL) * EXP_PER_WORKOUT + BASE_EXP,
        max_exp: MAX_EXP,
    }
}

/// Derive the stats of a profile. A profile without a plan counts as an
/// empty plan.
pub fn aggregate_profile(profile: &UserProfile) -> Stats {
    match &profile.plan {
        Some(plan) => aggregate(plan),
        None => aggregate(&Plan::default()),
    }
}

/// Exercise progress within one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayProgress {
    /// Exercises ticked off
    pub completed: usize,
    /// Exercises in the day
    pub total: usize,
}

impl DayProgress {
    /// Progress of the given day.
    pub fn of(day: &Day) -> Self {
        Self {
            completed: day.completed_exercises(),
            total: day.exercises.len(),
        }
    }

    /// Rounded completion percentage; 0 for a day without exercises.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Exercise;

    fn day(number: u32, completed: usize, total: usize, stamped: bool) -> Day {
        Day {
            day_number: number,
            day_name: "Full body".to_string(),
            estimated_workout_time: String::new(),
            suggested_calorie_intake: String::new(),
            date_completed: stamped.then(Timestamp::now),
            exercises: (0..total)
                .map(|i| Exercise {
                    completed: i < completed,
                    ..Exercise::new("Burpee", 3, 10)
                })
                .collect(),
        }
    }

    #[test]
    fn test_five_days_six_completed() {
        let plan = Plan::new(vec![
            day(1, 3, 3, true),
            day(2, 3, 3, true),
            day(3, 0, 3, false),
            day(4, 0, 3, false),
            day(5, 0, 3, false),
        ]);
        let stats = aggregate(&plan);

        assert_eq!(stats.total_workouts, 15);
        assert_eq!(stats.completed_workouts, 6);
        assert_eq!(stats.completed_days, 2);
        assert_eq!(stats.total_days, 5);
        assert_eq!(stats.level, 3);
        assert_eq!(stats.current_exp, 250);
        assert_eq!(stats.max_exp, 1000);
    }

    #[test]
    fn test_exp_is_not_clamped() {
        let plan = Plan::new(vec![day(1, 2, 3, false)]);
        let stats = aggregate(&plan);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.current_exp, 916);

        let plan = Plan::new(vec![day(1, 5, 6, false)]);
        let stats = aggregate(&plan);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.current_exp, 916);
        assert_eq!(stats.exp_percent(), 91);
    }

    #[test]
    fn test_completed_never_exceeds_total() {
        for completed in 0..=4 {
            let plan = Plan::new(vec![day(1, completed, 4, false), day(2, 0, 2, false)]);
            let stats = aggregate(&plan);
            assert!(stats.completed_workouts <= stats.total_workouts);
        }
    }

    #[test]
    fn test_profile_without_plan_counts_as_empty() {
        let profile = UserProfile {
            first_name: "Tom".to_string(),
            username: None,
            days: 30,
            intensity: "High".to_string(),
            plan: None,
        };
        let stats = aggregate_profile(&profile);
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.current_exp, 250);
    }

    #[test]
    fn test_day_progress_percent() {
        assert_eq!(DayProgress::of(&day(1, 1, 3, false)).percent(), 33);
        assert_eq!(DayProgress::of(&day(1, 2, 3, false)).percent(), 67);
        assert_eq!(DayProgress::of(&day(1, 0, 0, false)).percent(), 0);
    }

    #[test]
    fn test_from_plan() {
        let plan = Plan::new(vec![day(1, 1, 1, true)]);
        assert_eq!(Stats::from(&plan), aggregate(&plan));
    }
}
