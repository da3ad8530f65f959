//! Retroactive checkpoint finalization.

use chrono::NaiveDate;

use crate::goals::{Goal, MonthlyGoal, WeeklyGoal};
use crate::projection::is_achieved;
use crate::utils::time_utils::first_day_of_following_month;

/// Applies a newly observed value to a goal: every checkpoint whose period
/// has closed and has not been evaluated yet is frozen with the observed
/// value and the evaluator's verdict. Future checkpoints and checkpoints
/// that already carry an actual value are left untouched, so repeated calls
/// with the same inputs are idempotent.
///
/// Copy-on-write: returns a new `Goal`, never mutates checkpoints in place.
/// The caller is responsible for persisting the result.
pub fn apply_progress_update(goal: &Goal, current_value: f64, today: NaiveDate) -> Goal {
    let weekly_goals = goal
        .weekly_goals
        .iter()
        .map(|checkpoint| {
            if today >= checkpoint.week_end && checkpoint.actual_value.is_none() {
                WeeklyGoal {
                    achieved: is_achieved(goal.metric_type, current_value, checkpoint.target_value),
                    actual_value: Some(current_value),
                    ..checkpoint.clone()
                }
            } else {
                checkpoint.clone()
            }
        })
        .collect();

    let monthly_goals = goal
        .monthly_goals
        .iter()
        .map(|checkpoint| {
            let closes = first_day_of_following_month(checkpoint.month, checkpoint.year);
            if today >= closes && checkpoint.actual_value.is_none() {
                MonthlyGoal {
                    achieved: is_achieved(goal.metric_type, current_value, checkpoint.target_value),
                    actual_value: Some(current_value),
                    ..checkpoint.clone()
                }
            } else {
                checkpoint.clone()
            }
        })
        .collect();

    Goal {
        current_value: Some(current_value),
        weekly_goals,
        monthly_goals,
        ..goal.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_goal() -> Goal {
        Goal {
            id: "g-1".into(),
            metric_type: MetricType::Weight,
            target_value: 78.0,
            target_date: date(2025, 9, 1),
            current_value: Some(85.0),
            weekly_goals: vec![
                WeeklyGoal {
                    week_start: date(2025, 6, 2),
                    week_end: date(2025, 6, 8),
                    target_value: 84.0,
                    achieved: false,
                    actual_value: None,
                },
                WeeklyGoal {
                    week_start: date(2025, 6, 9),
                    week_end: date(2025, 6, 15),
                    target_value: 83.0,
                    achieved: false,
                    actual_value: None,
                },
            ],
            monthly_goals: vec![
                MonthlyGoal {
                    month: 7,
                    year: 2025,
                    target_value: 82.0,
                    achieved: false,
                    actual_value: None,
                },
                MonthlyGoal {
                    month: 8,
                    year: 2025,
                    target_value: 80.0,
                    achieved: false,
                    actual_value: None,
                },
            ],
        }
    }

    #[test]
    fn future_checkpoints_stay_pending() {
        let goal = sample_goal();
        let updated = apply_progress_update(&goal, 83.5, date(2025, 6, 4));

        assert!(updated.weekly_goals.iter().all(|w| !w.achieved));
        assert!(updated
            .weekly_goals
            .iter()
            .all(|w| w.actual_value.is_none()));
        assert!(updated.monthly_goals.iter().all(|m| !m.achieved));
        assert_eq!(updated.current_value, Some(83.5));
    }

    #[test]
    fn closed_week_is_frozen_with_the_evaluator_verdict() {
        let goal = sample_goal();
        // 83.9 <= 84.0 + 0.1 -> achieved for a lower-is-better metric.
        let updated = apply_progress_update(&goal, 83.9, date(2025, 6, 8));

        assert!(updated.weekly_goals[0].achieved);
        assert_eq!(updated.weekly_goals[0].actual_value, Some(83.9));
        // Second week ends in the future, untouched.
        assert!(!updated.weekly_goals[1].achieved);
        assert_eq!(updated.weekly_goals[1].actual_value, None);
    }

    #[test]
    fn closed_week_can_be_missed() {
        let goal = sample_goal();
        let updated = apply_progress_update(&goal, 84.5, date(2025, 6, 20));

        assert!(!updated.weekly_goals[0].achieved);
        assert_eq!(updated.weekly_goals[0].actual_value, Some(84.5));
        assert!(!updated.weekly_goals[1].achieved);
        assert_eq!(updated.weekly_goals[1].actual_value, Some(84.5));
    }

    #[test]
    fn month_closes_on_the_first_day_of_the_following_month() {
        let goal = sample_goal();

        let before = apply_progress_update(&goal, 81.0, date(2025, 7, 31));
        assert_eq!(before.monthly_goals[0].actual_value, None);

        let after = apply_progress_update(&goal, 81.0, date(2025, 8, 1));
        assert!(after.monthly_goals[0].achieved);
        assert_eq!(after.monthly_goals[0].actual_value, Some(81.0));
        assert_eq!(after.monthly_goals[1].actual_value, None);
    }

    #[test]
    fn update_is_idempotent() {
        let goal = sample_goal();
        let once = apply_progress_update(&goal, 83.9, date(2025, 6, 16));
        let twice = apply_progress_update(&once, 83.9, date(2025, 6, 16));
        assert_eq!(once, twice);
    }

    #[test]
    fn already_evaluated_checkpoints_keep_their_actual_value() {
        let mut goal = sample_goal();
        goal.weekly_goals[0].actual_value = Some(84.0);
        goal.weekly_goals[0].achieved = true;

        // A later, worse reading must not overwrite the frozen week.
        let updated = apply_progress_update(&goal, 86.0, date(2025, 6, 20));
        assert_eq!(updated.weekly_goals[0].actual_value, Some(84.0));
        assert!(updated.weekly_goals[0].achieved);
        // The second week closed now and takes the new value.
        assert_eq!(updated.weekly_goals[1].actual_value, Some(86.0));
        assert!(!updated.weekly_goals[1].achieved);
    }

    #[test]
    fn original_goal_is_not_mutated() {
        let goal = sample_goal();
        let _ = apply_progress_update(&goal, 83.9, date(2025, 6, 16));
        assert_eq!(goal, sample_goal());
    }
}
