//! Settings module - key/value app settings and typed accessors.

mod service;
mod traits;

pub use service::{SettingsService, SettingsServiceTrait};
pub use traits::SettingsRepositoryTrait;
