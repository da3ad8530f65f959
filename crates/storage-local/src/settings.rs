//! Settings repository over the local vault.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bodyfolio_core::constants::SETTINGS_COLLECTION;
use bodyfolio_core::errors::Result;
use bodyfolio_core::settings::SettingsRepositoryTrait;

use crate::errors::{poisoned_lock, read_error, write_error};
use crate::vault::LocalVault;

pub struct SettingsRepository {
    vault: Arc<LocalVault>,
    cache: RwLock<BTreeMap<String, String>>,
}

impl SettingsRepository {
    pub fn new(vault: Arc<LocalVault>) -> Result<Self> {
        let settings: BTreeMap<String, String> = vault
            .read(SETTINGS_COLLECTION)
            .map_err(|e| read_error(SETTINGS_COLLECTION, e))?
            .unwrap_or_default();
        Ok(SettingsRepository {
            vault,
            cache: RwLock::new(settings),
        })
    }

    fn read_cache(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, String>>> {
        self.cache.read().map_err(|_| poisoned_lock("settings"))
    }

    fn write_cache(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, String>>> {
        self.cache.write().map_err(|_| poisoned_lock("settings"))
    }
}

impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_cache()?.get(key).cloned())
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        let mut settings = self.write_cache()?;
        settings.insert(key.to_string(), value.to_string());
        self.vault
            .write(SETTINGS_COLLECTION, &*settings)
            .map_err(|e| write_error(SETTINGS_COLLECTION, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn settings_round_trip_across_reopens() {
        let dir = tempdir().unwrap();
        {
            let vault = Arc::new(LocalVault::open(dir.path()).unwrap());
            let repo = SettingsRepository::new(vault).unwrap();
            repo.set_setting("height_cm", "182").unwrap();
        }

        let vault = Arc::new(LocalVault::open(dir.path()).unwrap());
        let repo = SettingsRepository::new(vault).unwrap();
        assert_eq!(repo.get_setting("height_cm").unwrap().as_deref(), Some("182"));
        assert_eq!(repo.get_setting("unset").unwrap(), None);
    }
}
