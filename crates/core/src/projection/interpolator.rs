//! Linear goal interpolation.
//!
//! Produces the trajectory of intermediate targets between `today` and a
//! goal's target date: contiguous 7-day weekly windows plus one checkpoint
//! per calendar month. Used directly for every metric type except weight,
//! and as the fallback when body-composition data is incomplete.

use chrono::{Duration, NaiveDate};

use crate::goals::{MonthlyGoal, WeeklyGoal};
use crate::projection::round1;
use crate::utils::time_utils::{days_between, month_at_offset, whole_months_between};

/// The full precomputed trajectory for one goal.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub weekly: Vec<WeeklyGoal>,
    pub monthly: Vec<MonthlyGoal>,
}

/// Evenly interpolated weekly and monthly checkpoints from `start` (absent
/// start is treated as 0) to `target`.
///
/// Degenerate timespans never fail: a target date at or before `today`
/// collapses to a single period carrying the target value.
pub fn compute_linear_trajectory(
    start: Option<f64>,
    target: f64,
    today: NaiveDate,
    target_date: NaiveDate,
) -> Trajectory {
    let start = start.unwrap_or(0.0);
    let total_change = target - start;

    Trajectory {
        weekly: weekly_checkpoints(start, total_change, today, target_date),
        monthly: monthly_checkpoints(start, total_change, today, target_date),
    }
}

fn weekly_checkpoints(
    start: f64,
    total_change: f64,
    today: NaiveDate,
    target_date: NaiveDate,
) -> Vec<WeeklyGoal> {
    let total_days = days_between(today, target_date).max(0);
    // ceil(days / 7), minimum one period
    let total_weeks = ((total_days + 6) / 7).max(1);

    (0..total_weeks)
        .map(|week| {
            let week_start = today + Duration::days(week * 7);
            let week_end = (week_start + Duration::days(6)).min(target_date.max(today));
            // End-of-week target: week k covers progress up to (k+1)/total.
            let ratio = (week + 1) as f64 / total_weeks as f64;
            WeeklyGoal {
                week_start,
                week_end,
                target_value: round1(start + total_change * ratio),
                achieved: false,
                actual_value: None,
            }
        })
        .collect()
}

fn monthly_checkpoints(
    start: f64,
    total_change: f64,
    today: NaiveDate,
    target_date: NaiveDate,
) -> Vec<MonthlyGoal> {
    let total_months = whole_months_between(today, target_date).max(1);
    let change_per_month = total_change / total_months as f64;

    (1..=total_months)
        .map(|offset| {
            let (month, year) = month_at_offset(today, offset);
            MonthlyGoal {
                month,
                year,
                target_value: round1(start + change_per_month * offset as f64),
                achieved: false,
                actual_value: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn final_weekly_checkpoint_hits_the_target_exactly() {
        let trajectory =
            compute_linear_trajectory(Some(85.0), 78.0, date(2025, 6, 2), date(2025, 9, 2));
        let last = trajectory.weekly.last().unwrap();
        assert_eq!(last.target_value, 78.0);
        let last_month = trajectory.monthly.last().unwrap();
        assert_eq!(last_month.target_value, 78.0);
    }

    #[test]
    fn weekly_count_is_ceil_of_days_over_seven() {
        // 92 days -> 14 weeks
        let trajectory =
            compute_linear_trajectory(Some(85.0), 78.0, date(2025, 6, 2), date(2025, 9, 2));
        assert_eq!(trajectory.weekly.len(), 14);
        assert!(trajectory.weekly.len() >= trajectory.monthly.len());
    }

    #[test]
    fn weekly_windows_are_contiguous_and_clipped() {
        let today = date(2025, 6, 2);
        let target_date = date(2025, 6, 20); // 18 days -> 3 weeks
        let trajectory = compute_linear_trajectory(Some(80.0), 77.0, today, target_date);
        assert_eq!(trajectory.weekly.len(), 3);

        let w = &trajectory.weekly;
        assert_eq!(w[0].week_start, today);
        assert_eq!(w[0].week_end, date(2025, 6, 8));
        assert_eq!(w[1].week_start, date(2025, 6, 9));
        assert_eq!(w[1].week_end, date(2025, 6, 15));
        assert_eq!(w[2].week_start, date(2025, 6, 16));
        // Final window clipped to the target date, not a full 7 days.
        assert_eq!(w[2].week_end, target_date);
    }

    #[test]
    fn weekly_targets_interpolate_to_end_of_week() {
        let trajectory =
            compute_linear_trajectory(Some(80.0), 77.0, date(2025, 6, 2), date(2025, 6, 20));
        let targets: Vec<f64> = trajectory.weekly.iter().map(|w| w.target_value).collect();
        assert_eq!(targets, vec![79.0, 78.0, 77.0]);
    }

    #[test]
    fn monthly_checkpoints_start_the_month_after_today() {
        let trajectory =
            compute_linear_trajectory(Some(85.0), 79.0, date(2025, 6, 15), date(2025, 12, 15));
        assert_eq!(trajectory.monthly.len(), 6);
        assert_eq!(
            (trajectory.monthly[0].month, trajectory.monthly[0].year),
            (7, 2025)
        );
        assert_eq!(
            (trajectory.monthly[5].month, trajectory.monthly[5].year),
            (12, 2025)
        );
        let targets: Vec<f64> = trajectory.monthly.iter().map(|m| m.target_value).collect();
        assert_eq!(targets, vec![84.0, 83.0, 82.0, 81.0, 80.0, 79.0]);
    }

    #[test]
    fn monthly_checkpoints_cross_year_boundaries() {
        let trajectory =
            compute_linear_trajectory(Some(30.0), 26.0, date(2025, 11, 10), date(2026, 2, 10));
        let months: Vec<(u32, i32)> = trajectory
            .monthly
            .iter()
            .map(|m| (m.month, m.year))
            .collect();
        assert_eq!(months, vec![(12, 2025), (1, 2026), (2, 2026)]);
    }

    #[test]
    fn absent_start_value_is_treated_as_zero() {
        let trajectory =
            compute_linear_trajectory(None, 40.0, date(2025, 6, 2), date(2025, 6, 30));
        assert_eq!(trajectory.weekly.len(), 4);
        assert_eq!(trajectory.weekly[0].target_value, 10.0);
        assert_eq!(trajectory.weekly.last().unwrap().target_value, 40.0);
    }

    #[test]
    fn zero_day_span_collapses_to_a_single_period() {
        let today = date(2025, 6, 2);
        let trajectory = compute_linear_trajectory(Some(82.0), 80.0, today, today);
        assert_eq!(trajectory.weekly.len(), 1);
        assert_eq!(trajectory.weekly[0].target_value, 80.0);
        assert_eq!(trajectory.weekly[0].week_start, today);
        assert_eq!(trajectory.weekly[0].week_end, today);
        assert_eq!(trajectory.monthly.len(), 1);
        assert_eq!(trajectory.monthly[0].target_value, 80.0);
    }

    #[test]
    fn past_target_date_is_clamped_to_one_period() {
        let trajectory =
            compute_linear_trajectory(Some(82.0), 80.0, date(2025, 6, 10), date(2025, 6, 1));
        assert_eq!(trajectory.weekly.len(), 1);
        assert_eq!(trajectory.monthly.len(), 1);
        assert_eq!(trajectory.weekly[0].target_value, 80.0);
    }

    #[test]
    fn flat_trajectory_when_target_equals_start() {
        let trajectory =
            compute_linear_trajectory(Some(70.0), 70.0, date(2025, 6, 2), date(2025, 8, 2));
        assert!(trajectory.weekly.iter().all(|w| w.target_value == 70.0));
        assert!(trajectory.monthly.iter().all(|m| m.target_value == 70.0));
    }

    #[test]
    fn all_checkpoints_start_pending() {
        let trajectory =
            compute_linear_trajectory(Some(85.0), 78.0, date(2025, 6, 2), date(2025, 9, 2));
        assert!(trajectory
            .weekly
            .iter()
            .all(|w| !w.achieved && w.actual_value.is_none()));
        assert!(trajectory
            .monthly
            .iter()
            .all(|m| !m.achieved && m.actual_value.is_none()));
    }
}
