use crate::errors::Result;
use crate::goals::model::{Goal, NewGoal};
use crate::metrics::{HealthMetric, MetricType};
use chrono::NaiveDate;

/// Trait for goal repository operations.
///
/// Goals are keyed by metric type; the at-most-one-goal-per-type invariant is
/// structural, not enforced by scanning.
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, metric_type: MetricType) -> Result<Option<Goal>>;
    /// Inserts the goal, replacing any prior goal for the same metric type.
    fn upsert_goal(&self, goal: Goal) -> Result<Goal>;
    fn delete_goal(&self, metric_type: MetricType) -> Result<usize>;
    fn replace_all(&self, goals: Vec<Goal>) -> Result<usize>;
}

/// Trait for goal service operations
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, metric_type: MetricType) -> Result<Option<Goal>>;
    fn create_goal(&self, new_goal: NewGoal, today: NaiveDate) -> Result<Goal>;
    fn delete_goal(&self, metric_type: MetricType) -> Result<usize>;
    /// Re-evaluates elapsed checkpoints of every goal touched by a new
    /// measurement.
    fn apply_measurement(&self, metric: &HealthMetric, today: NaiveDate) -> Result<Vec<Goal>>;
    fn record_weekly_actual(
        &self,
        metric_type: MetricType,
        week_index: usize,
        actual_value: f64,
    ) -> Result<Goal>;
    fn record_monthly_actual(
        &self,
        metric_type: MetricType,
        month: u32,
        year: i32,
        actual_value: f64,
    ) -> Result<Goal>;
    fn sweep_expired(&self, today: NaiveDate) -> Result<usize>;
}
