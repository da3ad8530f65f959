//! Measurement domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five body metrics the tracker knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MetricType {
    Weight,
    MuscleMass,
    FatMass,
    Bmi,
    FatPercentage,
}

/// Whether progress for a metric is measured by decrease or increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

impl MetricType {
    pub const ALL: [MetricType; 5] = [
        MetricType::Weight,
        MetricType::MuscleMass,
        MetricType::FatMass,
        MetricType::Bmi,
        MetricType::FatPercentage,
    ];

    /// Display unit for the metric. BMI is unitless.
    pub fn unit(self) -> &'static str {
        match self {
            MetricType::Weight | MetricType::MuscleMass | MetricType::FatMass => "kg",
            MetricType::Bmi => "",
            MetricType::FatPercentage => "%",
        }
    }

    /// Direction policy: for everything but muscle mass, a drop is progress.
    pub fn direction(self) -> Direction {
        match self {
            MetricType::MuscleMass => Direction::HigherIsBetter,
            MetricType::Weight
            | MetricType::FatMass
            | MetricType::Bmi
            | MetricType::FatPercentage => Direction::LowerIsBetter,
        }
    }

    /// Accepted value range, used by form-path validation.
    pub fn valid_range(self) -> (f64, f64) {
        match self {
            MetricType::Weight => (20.0, 300.0),
            MetricType::MuscleMass => (5.0, 150.0),
            MetricType::FatMass => (1.0, 200.0),
            MetricType::Bmi => (10.0, 60.0),
            MetricType::FatPercentage => (2.0, 70.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricType::Weight => "Weight",
            MetricType::MuscleMass => "Muscle mass",
            MetricType::FatMass => "Fat mass",
            MetricType::Bmi => "BMI",
            MetricType::FatPercentage => "Fat percentage",
        }
    }

    /// Interchange name, matching the persisted `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricType::Weight => "weight",
            MetricType::MuscleMass => "muscleMass",
            MetricType::FatMass => "fatMass",
            MetricType::Bmi => "bmi",
            MetricType::FatPercentage => "fatPercentage",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(MetricType::Weight),
            "muscleMass" | "muscle-mass" => Ok(MetricType::MuscleMass),
            "fatMass" | "fat-mass" => Ok(MetricType::FatMass),
            "bmi" => Ok(MetricType::Bmi),
            "fatPercentage" | "fat-percentage" => Ok(MetricType::FatPercentage),
            other => Err(format!("unknown metric type '{other}'")),
        }
    }
}

/// One user-entered measurement snapshot. Any subset of the readings may be
/// present; the validated creation path requires at least one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_percentage: Option<f64>,
}

impl HealthMetric {
    /// The reading for a given metric type, if present.
    pub fn value_of(&self, metric_type: MetricType) -> Option<f64> {
        match metric_type {
            MetricType::Weight => self.weight,
            MetricType::MuscleMass => self.muscle_mass,
            MetricType::FatMass => self.fat_mass,
            MetricType::Bmi => self.bmi,
            MetricType::FatPercentage => self.fat_percentage,
        }
    }

    pub fn has_any_reading(&self) -> bool {
        MetricType::ALL.iter().any(|t| self.value_of(*t).is_some())
    }

    /// True when the snapshot carries everything the body-composition
    /// projector needs besides height.
    pub fn is_complete_composition(&self) -> bool {
        self.weight.is_some()
            && self.muscle_mass.is_some()
            && self.fat_mass.is_some()
            && self.fat_percentage.is_some()
    }
}

/// Input model for creating a new measurement.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewHealthMetric {
    pub date: NaiveDate,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub muscle_mass: Option<f64>,
    #[serde(default)]
    pub fat_mass: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub fat_percentage: Option<f64>,
}

impl NewHealthMetric {
    pub fn value_of(&self, metric_type: MetricType) -> Option<f64> {
        match metric_type {
            MetricType::Weight => self.weight,
            MetricType::MuscleMass => self.muscle_mass,
            MetricType::FatMass => self.fat_mass,
            MetricType::Bmi => self.bmi,
            MetricType::FatPercentage => self.fat_percentage,
        }
    }
}

/// Summary of the stored data set, surfaced by the retention tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataStats {
    pub total_metrics: usize,
    pub total_goals: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_metric: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_metric: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_type_serializes_to_interchange_names() {
        for metric_type in MetricType::ALL {
            let json = serde_json::to_string(&metric_type).unwrap();
            assert_eq!(json, format!("\"{}\"", metric_type.as_str()));
        }
    }

    #[test]
    fn metric_type_round_trips_through_from_str() {
        for metric_type in MetricType::ALL {
            assert_eq!(metric_type.as_str().parse::<MetricType>(), Ok(metric_type));
        }
        assert!("waterMass".parse::<MetricType>().is_err());
    }

    #[test]
    fn direction_policy_matches_metric_semantics() {
        assert_eq!(MetricType::Weight.direction(), Direction::LowerIsBetter);
        assert_eq!(MetricType::FatMass.direction(), Direction::LowerIsBetter);
        assert_eq!(MetricType::Bmi.direction(), Direction::LowerIsBetter);
        assert_eq!(
            MetricType::FatPercentage.direction(),
            Direction::LowerIsBetter
        );
        assert_eq!(MetricType::MuscleMass.direction(), Direction::HigherIsBetter);
    }

    #[test]
    fn absent_readings_are_omitted_from_json() {
        let metric = HealthMetric {
            id: "m-1".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            weight: Some(82.5),
            muscle_mass: None,
            fat_mass: None,
            bmi: None,
            fat_percentage: None,
        };
        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["weight"], 82.5);
        assert_eq!(json["date"], "2025-06-01");
        assert!(json.get("muscleMass").is_none());
        assert!(json.get("fatMass").is_none());
    }
}
