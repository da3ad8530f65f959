use crate::errors::Result;

/// Trait for settings repository operations
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Returns the stored value for `key`, or `None` when unset.
    fn get_setting(&self, key: &str) -> Result<Option<String>>;
    fn set_setting(&self, key: &str, value: &str) -> Result<()>;
}
