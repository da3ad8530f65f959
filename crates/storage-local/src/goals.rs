//! Goal repository over the local vault.
//!
//! Goals are indexed by metric type in memory, which makes the
//! at-most-one-goal-per-type invariant structural. The persisted layout is
//! still the interchange array of goal records.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bodyfolio_core::constants::GOALS_COLLECTION;
use bodyfolio_core::errors::Result;
use bodyfolio_core::goals::{Goal, GoalRepositoryTrait};
use bodyfolio_core::metrics::MetricType;

use crate::errors::{poisoned_lock, read_error, write_error};
use crate::vault::LocalVault;

pub struct GoalRepository {
    vault: Arc<LocalVault>,
    cache: RwLock<BTreeMap<MetricType, Goal>>,
}

impl GoalRepository {
    pub fn new(vault: Arc<LocalVault>) -> Result<Self> {
        let stored: Vec<Goal> = vault
            .read(GOALS_COLLECTION)
            .map_err(|e| read_error(GOALS_COLLECTION, e))?
            .unwrap_or_default();
        // Later records win, matching replace-on-new-goal semantics.
        let goals = stored.into_iter().map(|g| (g.metric_type, g)).collect();
        Ok(GoalRepository {
            vault,
            cache: RwLock::new(goals),
        })
    }

    fn read_cache(&self) -> Result<RwLockReadGuard<'_, BTreeMap<MetricType, Goal>>> {
        self.cache.read().map_err(|_| poisoned_lock("goals"))
    }

    fn write_cache(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<MetricType, Goal>>> {
        self.cache.write().map_err(|_| poisoned_lock("goals"))
    }

    fn persist(&self, goals: &BTreeMap<MetricType, Goal>) -> Result<()> {
        let records: Vec<&Goal> = goals.values().collect();
        self.vault
            .write(GOALS_COLLECTION, &records)
            .map_err(|e| write_error(GOALS_COLLECTION, e))
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.read_cache()?.values().cloned().collect())
    }

    fn get_goal(&self, metric_type: MetricType) -> Result<Option<Goal>> {
        Ok(self.read_cache()?.get(&metric_type).cloned())
    }

    fn upsert_goal(&self, goal: Goal) -> Result<Goal> {
        let mut goals = self.write_cache()?;
        goals.insert(goal.metric_type, goal.clone());
        self.persist(&goals)?;
        Ok(goal)
    }

    fn delete_goal(&self, metric_type: MetricType) -> Result<usize> {
        let mut goals = self.write_cache()?;
        let removed = usize::from(goals.remove(&metric_type).is_some());
        if removed > 0 {
            self.persist(&goals)?;
        }
        Ok(removed)
    }

    fn replace_all(&self, new_goals: Vec<Goal>) -> Result<usize> {
        let mut goals = self.write_cache()?;
        *goals = new_goals.into_iter().map(|g| (g.metric_type, g)).collect();
        self.persist(&goals)?;
        Ok(goals.len())
    }
}
