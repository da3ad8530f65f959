//! Goal domain models.
//!
//! A goal targets exactly one metric type and owns its trajectory: the
//! ordered weekly and monthly checkpoints computed at creation time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::MetricType;

/// A target for one metric type, with its precomputed trajectory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub target_value: f64,
    pub target_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub weekly_goals: Vec<WeeklyGoal>,
    #[serde(default)]
    pub monthly_goals: Vec<MonthlyGoal>,
}

/// One projected weekly checkpoint: a contiguous 7-day window (the final
/// window is clipped to the goal's target date).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub target_value: f64,
    pub achieved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<f64>,
}

/// One projected monthly checkpoint, identified by calendar month and year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyGoal {
    pub month: u32,
    pub year: i32,
    pub target_value: f64,
    pub achieved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<f64>,
}

/// Input model for creating a new goal. The trajectory is computed by the
/// goal service, not supplied by the caller.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub target_value: f64,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub current_value: Option<f64>,
}
