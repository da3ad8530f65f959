//! Checkpoint achievement evaluation.

use crate::constants::ACHIEVEMENT_TOLERANCE;
use crate::metrics::{Direction, MetricType};

/// Whether a measured value satisfies a checkpoint's target, within the fixed
/// [`ACHIEVEMENT_TOLERANCE`] and the metric's direction policy.
///
/// Deterministic and total: `MetricType` is a closed enum, so the
/// unknown-type case cannot arise here (serde rejects unknown type strings at
/// the import boundary instead).
pub fn is_achieved(metric_type: MetricType, actual: f64, target: f64) -> bool {
    match metric_type.direction() {
        Direction::LowerIsBetter => actual <= target + ACHIEVEMENT_TOLERANCE,
        Direction::HigherIsBetter => actual >= target - ACHIEVEMENT_TOLERANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muscle_mass_is_higher_is_better_with_tolerance() {
        assert!(is_achieved(MetricType::MuscleMass, 50.05, 50.0));
        assert!(is_achieved(MetricType::MuscleMass, 49.9, 50.0));
        assert!(!is_achieved(MetricType::MuscleMass, 49.8, 50.0));
        assert!(is_achieved(MetricType::MuscleMass, 51.0, 50.0));
    }

    #[test]
    fn weight_is_lower_is_better_with_tolerance() {
        assert!(is_achieved(MetricType::Weight, 79.95, 80.0));
        assert!(is_achieved(MetricType::Weight, 80.1, 80.0));
        assert!(!is_achieved(MetricType::Weight, 80.2, 80.0));
        assert!(is_achieved(MetricType::Weight, 75.0, 80.0));
    }

    #[test]
    fn remaining_lower_is_better_metrics_share_the_rule() {
        for metric_type in [MetricType::FatMass, MetricType::FatPercentage, MetricType::Bmi] {
            assert!(is_achieved(metric_type, 20.1, 20.0), "{metric_type}");
            assert!(!is_achieved(metric_type, 20.2, 20.0), "{metric_type}");
        }
    }
}
