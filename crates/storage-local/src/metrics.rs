//! Measurement repository over the local vault.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bodyfolio_core::constants::METRICS_COLLECTION;
use bodyfolio_core::errors::Result;
use bodyfolio_core::metrics::{HealthMetric, MetricRepositoryTrait};
use chrono::NaiveDate;

use crate::errors::{poisoned_lock, read_error, write_error};
use crate::vault::LocalVault;

pub struct MetricRepository {
    vault: Arc<LocalVault>,
    cache: RwLock<Vec<HealthMetric>>,
}

impl MetricRepository {
    pub fn new(vault: Arc<LocalVault>) -> Result<Self> {
        let metrics: Vec<HealthMetric> = vault
            .read(METRICS_COLLECTION)
            .map_err(|e| read_error(METRICS_COLLECTION, e))?
            .unwrap_or_default();
        Ok(MetricRepository {
            vault,
            cache: RwLock::new(metrics),
        })
    }

    fn read_cache(&self) -> Result<RwLockReadGuard<'_, Vec<HealthMetric>>> {
        self.cache.read().map_err(|_| poisoned_lock("metrics"))
    }

    fn write_cache(&self) -> Result<RwLockWriteGuard<'_, Vec<HealthMetric>>> {
        self.cache.write().map_err(|_| poisoned_lock("metrics"))
    }

    fn persist(&self, metrics: &[HealthMetric]) -> Result<()> {
        self.vault
            .write(METRICS_COLLECTION, &metrics)
            .map_err(|e| write_error(METRICS_COLLECTION, e))
    }
}

impl MetricRepositoryTrait for MetricRepository {
    fn load_metrics(&self) -> Result<Vec<HealthMetric>> {
        Ok(self.read_cache()?.clone())
    }

    fn insert_metric(&self, metric: HealthMetric) -> Result<HealthMetric> {
        let mut metrics = self.write_cache()?;
        metrics.push(metric.clone());
        self.persist(&metrics)?;
        Ok(metric)
    }

    fn replace_all(&self, new_metrics: Vec<HealthMetric>) -> Result<usize> {
        let mut metrics = self.write_cache()?;
        *metrics = new_metrics;
        self.persist(&metrics)?;
        Ok(metrics.len())
    }

    fn delete_older_than(&self, cutoff: NaiveDate) -> Result<usize> {
        let mut metrics = self.write_cache()?;
        let before = metrics.len();
        metrics.retain(|m| m.date >= cutoff);
        let removed = before - metrics.len();
        if removed > 0 {
            self.persist(&metrics)?;
        }
        Ok(removed)
    }

    fn clear(&self) -> Result<usize> {
        let mut metrics = self.write_cache()?;
        let removed = metrics.len();
        metrics.clear();
        self.persist(&metrics)?;
        Ok(removed)
    }
}
