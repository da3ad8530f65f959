//! Application-wide constants.

/// Storage collection holding measurement records.
pub const METRICS_COLLECTION: &str = "healthMetrics";

/// Storage collection holding goal records.
pub const GOALS_COLLECTION: &str = "healthGoals";

/// Storage collection holding key/value settings.
pub const SETTINGS_COLLECTION: &str = "appSettings";

/// Absolute slack allowed when judging whether a checkpoint was achieved,
/// in the same unit as the metric. Product-tuning value, not physiologically
/// derived.
pub const ACHIEVEMENT_TOLERANCE: f64 = 0.1;

/// Share of a total mass change attributed to fat mass in body-composition
/// projections. Product-tuning value; together with
/// [`MUSCLE_MASS_SHARE`] it must sum to 1.0.
pub const FAT_MASS_SHARE: f64 = 0.85;

/// Share of a total mass change attributed to muscle mass in body-composition
/// projections.
pub const MUSCLE_MASS_SHARE: f64 = 0.15;

/// Fallback height when the user has not configured one, in centimeters.
pub const DEFAULT_HEIGHT_CM: f64 = 175.0;

/// Measurements older than this are removed by the retention sweep.
pub const MAX_METRIC_AGE_DAYS: i64 = 365 * 2;

/// Goals whose target date is older than this are removed by the retention
/// sweep.
pub const MAX_GOAL_AGE_DAYS: i64 = 365;

/// Goal target dates may be at most this far in the future.
pub const MAX_GOAL_HORIZON_DAYS: i64 = 365;

/// Settings key for the user's height in centimeters.
pub const SETTING_HEIGHT_CM: &str = "height_cm";
