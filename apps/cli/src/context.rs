//! Service wiring: one vault, three repositories, four services.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use bodyfolio_core::goals::{GoalService, GoalServiceTrait};
use bodyfolio_core::metrics::{MetricService, MetricServiceTrait};
use bodyfolio_core::settings::{SettingsService, SettingsServiceTrait};
use bodyfolio_core::transfer::{TransferService, TransferServiceTrait};
use bodyfolio_storage_local::{
    GoalRepository, LocalVault, MetricRepository, SettingsRepository,
};

pub struct AppContext {
    pub metric_service: Arc<dyn MetricServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub transfer_service: Arc<dyn TransferServiceTrait>,
}

pub fn build_context(data_dir: Option<PathBuf>) -> Result<AppContext> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    log::debug!("Using data directory {}", data_dir.display());

    let vault = Arc::new(
        LocalVault::open(&data_dir)
            .with_context(|| format!("opening vault at {}", data_dir.display()))?,
    );

    let metric_repo = Arc::new(MetricRepository::new(vault.clone())?);
    let goal_repo = Arc::new(GoalRepository::new(vault.clone())?);
    let settings_repo = Arc::new(SettingsRepository::new(vault)?);

    let metric_service = Arc::new(MetricService::new(metric_repo.clone()));
    let settings_service = Arc::new(SettingsService::new(settings_repo));
    let goal_service = Arc::new(GoalService::new(
        goal_repo.clone(),
        metric_service.clone(),
        settings_service.clone(),
    ));
    let transfer_service = Arc::new(TransferService::new(metric_repo, goal_repo));

    Ok(AppContext {
        metric_service,
        goal_service,
        settings_service,
        transfer_service,
    })
}

fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("no local data directory on this platform")?;
    Ok(base.join("bodyfolio"))
}
