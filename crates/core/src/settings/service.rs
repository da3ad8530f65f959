use std::sync::Arc;

use crate::constants::{DEFAULT_HEIGHT_CM, SETTING_HEIGHT_CM};
use crate::errors::{Result, ValidationError};
use crate::settings::SettingsRepositoryTrait;

// Define the trait for SettingsService
pub trait SettingsServiceTrait: Send + Sync {
    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;

    /// Set a single setting value by key.
    fn set_setting_value(&self, key: &str, value: &str) -> Result<()>;

    /// The user's height in centimeters, falling back to the default when
    /// unset or unparsable.
    fn height_cm(&self) -> Result<f64>;

    fn set_height_cm(&self, height_cm: f64) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        self.settings_repository.get_setting(key)
    }

    fn set_setting_value(&self, key: &str, value: &str) -> Result<()> {
        self.settings_repository.set_setting(key, value)
    }

    fn height_cm(&self) -> Result<f64> {
        Ok(self
            .settings_repository
            .get_setting(SETTING_HEIGHT_CM)?
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HEIGHT_CM))
    }

    fn set_height_cm(&self, height_cm: f64) -> Result<()> {
        if !(50.0..=250.0).contains(&height_cm) {
            return Err(ValidationError::OutOfRange(format!(
                "height must be between 50 and 250 cm, got {height_cm}"
            ))
            .into());
        }
        self.settings_repository
            .set_setting(SETTING_HEIGHT_CM, &height_cm.to_string())
    }
}
