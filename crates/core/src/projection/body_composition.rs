//! Body-composition projection for weight goals.
//!
//! Where the linear interpolator tracks one number, this projector walks the
//! whole composition: a fixed share of each month's mass change is attributed
//! to fat and muscle, and BMI plus fat percentage are re-derived from the
//! projected masses at every step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{FAT_MASS_SHARE, MUSCLE_MASS_SHARE};
use crate::goals::MonthlyGoal;
use crate::projection::round1;
use crate::utils::time_utils::{month_at_offset, whole_months_between};

/// Inputs for a body-composition projection. All masses in kilograms, height
/// in centimeters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyCompositionParams {
    pub current_weight: f64,
    pub target_weight: f64,
    pub target_date: NaiveDate,
    pub height_cm: f64,
    pub muscle_mass: f64,
    pub fat_mass: f64,
    /// Accepted for completeness; the projection re-derives fat percentage
    /// from the projected masses instead of interpolating this value.
    pub fat_percentage: f64,
}

/// One projected month. Month 0 is the current snapshot, not a future
/// checkpoint. All values rounded to one decimal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyProjection {
    pub month: u32,
    pub weight: f64,
    pub muscle_mass: f64,
    pub fat_mass: f64,
    pub bmi: f64,
    pub fat_percentage: f64,
}

/// Projects weight, fat mass, and muscle mass month by month, deriving BMI
/// and fat percentage at each step.
///
/// The total mass change (positive = loss) is split 85/15 between fat and
/// muscle and spread evenly across `max(1, whole months to target)` months.
pub fn compute_body_composition_trajectory(
    params: &BodyCompositionParams,
    today: NaiveDate,
) -> Vec<BodyProjection> {
    let months = whole_months_between(today, params.target_date).max(1);
    let height_m = params.height_cm / 100.0;

    let total_loss = params.current_weight - params.target_weight;
    let fat_loss_per_month = total_loss * FAT_MASS_SHARE / months as f64;
    let muscle_loss_per_month = total_loss * MUSCLE_MASS_SHARE / months as f64;
    let loss_per_month = total_loss / months as f64;

    (0..=months)
        .map(|i| {
            let step = i as f64;
            let weight = params.current_weight - loss_per_month * step;
            let fat_mass = params.fat_mass - fat_loss_per_month * step;
            let muscle_mass = params.muscle_mass - muscle_loss_per_month * step;
            BodyProjection {
                month: i as u32,
                weight: round1(weight),
                muscle_mass: round1(muscle_mass),
                fat_mass: round1(fat_mass),
                bmi: round1(weight / (height_m * height_m)),
                fat_percentage: round1(fat_mass / weight * 100.0),
            }
        })
        .collect()
}

/// Converts a projection into stored monthly checkpoints for a weight goal.
///
/// Month 0 (the current snapshot) is skipped; checkpoint `i` carries the
/// projected weight, dated to the last day of the `i`-th month after `today`.
pub fn monthly_goals_from_projection(
    projections: &[BodyProjection],
    today: NaiveDate,
) -> Vec<MonthlyGoal> {
    projections
        .iter()
        .filter(|p| p.month > 0)
        .map(|p| {
            let (month, year) = month_at_offset(today, i64::from(p.month));
            MonthlyGoal {
                month,
                year,
                target_value: p.weight,
                achieved: false,
                actual_value: None,
            }
        })
        .collect()
}
