use crate::errors::Result;
use crate::metrics::model::{DataStats, HealthMetric, MetricType, NewHealthMetric};
use chrono::NaiveDate;

/// Trait for measurement repository operations
pub trait MetricRepositoryTrait: Send + Sync {
    fn load_metrics(&self) -> Result<Vec<HealthMetric>>;
    fn insert_metric(&self, metric: HealthMetric) -> Result<HealthMetric>;
    fn replace_all(&self, metrics: Vec<HealthMetric>) -> Result<usize>;
    fn delete_older_than(&self, cutoff: NaiveDate) -> Result<usize>;
    fn clear(&self) -> Result<usize>;
}

/// Trait for measurement service operations
pub trait MetricServiceTrait: Send + Sync {
    fn get_metrics(&self) -> Result<Vec<HealthMetric>>;
    fn create_metric(&self, new_metric: NewHealthMetric) -> Result<HealthMetric>;
    fn latest_value(&self, metric_type: MetricType) -> Result<Option<f64>>;
    fn latest_composition_snapshot(&self) -> Result<Option<HealthMetric>>;
    fn sweep_expired(&self, today: NaiveDate) -> Result<usize>;
    fn clear_all(&self) -> Result<usize>;
    fn data_stats(&self, total_goals: usize) -> Result<DataStats>;
}
