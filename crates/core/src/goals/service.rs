use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use log::{debug, info};
use uuid::Uuid;

use crate::constants::{MAX_GOAL_AGE_DAYS, MAX_GOAL_HORIZON_DAYS};
use crate::errors::{Result, StoreError, ValidationError};
use crate::goals::model::{Goal, MonthlyGoal, NewGoal, WeeklyGoal};
use crate::goals::traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::metrics::{HealthMetric, MetricServiceTrait, MetricType};
use crate::projection::{
    apply_progress_update, compute_body_composition_trajectory, compute_linear_trajectory,
    is_achieved, monthly_goals_from_projection, BodyCompositionParams,
};
use crate::settings::SettingsServiceTrait;
use crate::utils::time_utils::days_between;

/// Service owning the goal lifecycle: creation (which precomputes the
/// trajectory), progress updates driven by new measurements, manual
/// actual-value edits, and the retention sweep.
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    metric_service: Arc<dyn MetricServiceTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        metric_service: Arc<dyn MetricServiceTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        GoalService {
            goal_repo,
            metric_service,
            settings_service,
        }
    }

    fn validate(new_goal: &NewGoal, today: NaiveDate) -> Result<()> {
        let (min, max) = new_goal.metric_type.valid_range();
        if !(min..=max).contains(&new_goal.target_value) {
            return Err(ValidationError::OutOfRange(format!(
                "{} target must be between {min} and {max}, got {}",
                new_goal.metric_type.label(),
                new_goal.target_value
            ))
            .into());
        }
        if new_goal.target_date <= today {
            return Err(
                ValidationError::InvalidDate("target date must be in the future".into()).into(),
            );
        }
        if new_goal.target_date > today + Duration::days(MAX_GOAL_HORIZON_DAYS) {
            return Err(ValidationError::InvalidDate(
                "target date must be within one year".into(),
            )
            .into());
        }
        Ok(())
    }

    /// Monthly checkpoints for a weight goal via the body-composition
    /// projector, when a complete snapshot and height are available.
    fn composition_monthly(
        &self,
        new_goal: &NewGoal,
        today: NaiveDate,
    ) -> Result<Option<Vec<MonthlyGoal>>> {
        if new_goal.metric_type != MetricType::Weight {
            return Ok(None);
        }
        let Some(snapshot) = self.metric_service.latest_composition_snapshot()? else {
            debug!("No complete composition snapshot; falling back to linear weight trajectory");
            return Ok(None);
        };
        let (Some(weight), Some(muscle_mass), Some(fat_mass), Some(fat_percentage)) = (
            snapshot.weight,
            snapshot.muscle_mass,
            snapshot.fat_mass,
            snapshot.fat_percentage,
        ) else {
            return Ok(None);
        };

        let params = BodyCompositionParams {
            current_weight: weight,
            target_weight: new_goal.target_value,
            target_date: new_goal.target_date,
            height_cm: self.settings_service.height_cm()?,
            muscle_mass,
            fat_mass,
            fat_percentage,
        };
        let projections = compute_body_composition_trajectory(&params, today);
        Ok(Some(monthly_goals_from_projection(&projections, today)))
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    fn get_goal(&self, metric_type: MetricType) -> Result<Option<Goal>> {
        self.goal_repo.get_goal(metric_type)
    }

    fn create_goal(&self, new_goal: NewGoal, today: NaiveDate) -> Result<Goal> {
        Self::validate(&new_goal, today)?;

        let current_value = match new_goal.current_value {
            Some(value) => Some(value),
            None => self.metric_service.latest_value(new_goal.metric_type)?,
        };

        let trajectory = compute_linear_trajectory(
            current_value,
            new_goal.target_value,
            today,
            new_goal.target_date,
        );
        let monthly_goals = match self.composition_monthly(&new_goal, today)? {
            Some(monthly) => monthly,
            None => trajectory.monthly,
        };

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            metric_type: new_goal.metric_type,
            target_value: new_goal.target_value,
            target_date: new_goal.target_date,
            current_value,
            weekly_goals: trajectory.weekly,
            monthly_goals,
        };
        info!(
            "Creating {} goal: target {} by {}",
            goal.metric_type, goal.target_value, goal.target_date
        );
        self.goal_repo.upsert_goal(goal)
    }

    fn delete_goal(&self, metric_type: MetricType) -> Result<usize> {
        self.goal_repo.delete_goal(metric_type)
    }

    fn apply_measurement(&self, metric: &HealthMetric, today: NaiveDate) -> Result<Vec<Goal>> {
        let mut updated = Vec::new();
        for metric_type in MetricType::ALL {
            let Some(value) = metric.value_of(metric_type) else {
                continue;
            };
            let Some(goal) = self.goal_repo.get_goal(metric_type)? else {
                continue;
            };
            let refreshed = apply_progress_update(&goal, value, today);
            updated.push(self.goal_repo.upsert_goal(refreshed)?);
        }
        Ok(updated)
    }

    fn record_weekly_actual(
        &self,
        metric_type: MetricType,
        week_index: usize,
        actual_value: f64,
    ) -> Result<Goal> {
        let goal = self
            .goal_repo
            .get_goal(metric_type)?
            .ok_or_else(|| StoreError::NotFound(format!("no {metric_type} goal")))?;
        if week_index >= goal.weekly_goals.len() {
            return Err(ValidationError::InvalidInput(format!(
                "week {week_index} is out of range (goal has {} weeks)",
                goal.weekly_goals.len()
            ))
            .into());
        }

        let weekly_goals = goal
            .weekly_goals
            .iter()
            .enumerate()
            .map(|(index, checkpoint)| {
                if index == week_index {
                    WeeklyGoal {
                        achieved: is_achieved(metric_type, actual_value, checkpoint.target_value),
                        actual_value: Some(actual_value),
                        ..checkpoint.clone()
                    }
                } else {
                    checkpoint.clone()
                }
            })
            .collect();
        self.goal_repo.upsert_goal(Goal {
            weekly_goals,
            ..goal
        })
    }

    fn record_monthly_actual(
        &self,
        metric_type: MetricType,
        month: u32,
        year: i32,
        actual_value: f64,
    ) -> Result<Goal> {
        let goal = self
            .goal_repo
            .get_goal(metric_type)?
            .ok_or_else(|| StoreError::NotFound(format!("no {metric_type} goal")))?;
        if !goal
            .monthly_goals
            .iter()
            .any(|m| m.month == month && m.year == year)
        {
            return Err(ValidationError::InvalidInput(format!(
                "goal has no checkpoint for {month}/{year}"
            ))
            .into());
        }

        let monthly_goals = goal
            .monthly_goals
            .iter()
            .map(|checkpoint| {
                if checkpoint.month == month && checkpoint.year == year {
                    MonthlyGoal {
                        achieved: is_achieved(metric_type, actual_value, checkpoint.target_value),
                        actual_value: Some(actual_value),
                        ..checkpoint.clone()
                    }
                } else {
                    checkpoint.clone()
                }
            })
            .collect();
        self.goal_repo.upsert_goal(Goal {
            monthly_goals,
            ..goal
        })
    }

    fn sweep_expired(&self, today: NaiveDate) -> Result<usize> {
        let goals = self.goal_repo.load_goals()?;
        let before = goals.len();
        let retained: Vec<Goal> = goals
            .into_iter()
            .filter(|g| days_between(g.target_date, today) <= MAX_GOAL_AGE_DAYS)
            .collect();
        let removed = before - retained.len();
        if removed > 0 {
            self.goal_repo.replace_all(retained)?;
            info!("Retention sweep removed {removed} expired goals");
        }
        Ok(removed)
    }
}
