use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use log::{debug, info};
use uuid::Uuid;

use crate::constants::MAX_METRIC_AGE_DAYS;
use crate::errors::{Result, ValidationError};
use crate::metrics::model::{DataStats, HealthMetric, MetricType, NewHealthMetric};
use crate::metrics::traits::{MetricRepositoryTrait, MetricServiceTrait};

/// Service for the validated measurement path: creation, lookups used by the
/// projection engine, and the retention sweep.
pub struct MetricService {
    metric_repo: Arc<dyn MetricRepositoryTrait>,
}

impl MetricService {
    pub fn new(metric_repo: Arc<dyn MetricRepositoryTrait>) -> Self {
        MetricService { metric_repo }
    }

    fn validate(new_metric: &NewHealthMetric) -> Result<()> {
        let mut any_reading = false;
        for metric_type in MetricType::ALL {
            if let Some(value) = new_metric.value_of(metric_type) {
                any_reading = true;
                let (min, max) = metric_type.valid_range();
                if !(min..=max).contains(&value) {
                    return Err(ValidationError::OutOfRange(format!(
                        "{} must be between {min} and {max}, got {value}",
                        metric_type.label()
                    ))
                    .into());
                }
            }
        }
        if !any_reading {
            return Err(
                ValidationError::MissingField("at least one reading is required".into()).into(),
            );
        }
        Ok(())
    }
}

impl MetricServiceTrait for MetricService {
    /// Measurements, newest first.
    fn get_metrics(&self) -> Result<Vec<HealthMetric>> {
        let mut metrics = self.metric_repo.load_metrics()?;
        metrics.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(metrics)
    }

    fn create_metric(&self, new_metric: NewHealthMetric) -> Result<HealthMetric> {
        Self::validate(&new_metric)?;
        let metric = HealthMetric {
            id: Uuid::new_v4().to_string(),
            date: new_metric.date,
            weight: new_metric.weight,
            muscle_mass: new_metric.muscle_mass,
            fat_mass: new_metric.fat_mass,
            bmi: new_metric.bmi,
            fat_percentage: new_metric.fat_percentage,
        };
        debug!("Recording measurement for {}", metric.date);
        self.metric_repo.insert_metric(metric)
    }

    /// The most recent reading for a single metric type.
    fn latest_value(&self, metric_type: MetricType) -> Result<Option<f64>> {
        Ok(self
            .get_metrics()?
            .iter()
            .find_map(|m| m.value_of(metric_type)))
    }

    /// The most recent snapshot carrying weight, muscle mass, fat mass, and
    /// fat percentage together. The body-composition projector needs all
    /// four.
    fn latest_composition_snapshot(&self) -> Result<Option<HealthMetric>> {
        Ok(self
            .get_metrics()?
            .into_iter()
            .find(HealthMetric::is_complete_composition))
    }

    /// Removes measurements past the retention horizon and reports how many
    /// were dropped.
    fn sweep_expired(&self, today: NaiveDate) -> Result<usize> {
        let cutoff = today - Duration::days(MAX_METRIC_AGE_DAYS);
        let removed = self.metric_repo.delete_older_than(cutoff)?;
        if removed > 0 {
            info!("Retention sweep removed {removed} measurements older than {cutoff}");
        }
        Ok(removed)
    }

    fn clear_all(&self) -> Result<usize> {
        self.metric_repo.clear()
    }

    fn data_stats(&self, total_goals: usize) -> Result<DataStats> {
        let metrics = self.metric_repo.load_metrics()?;
        Ok(DataStats {
            total_metrics: metrics.len(),
            total_goals,
            oldest_metric: metrics.iter().map(|m| m.date).min(),
            newest_metric: metrics.iter().map(|m| m.date).max(),
        })
    }
}
