//! Local storage implementation for Bodyfolio.
//!
//! This crate persists the application's collections as obfuscated JSON
//! files under a single data directory and implements the repository traits
//! defined in `bodyfolio-core`. It is the only place in the application that
//! touches the filesystem or a cipher.
//!
//! The obfuscation (ChaCha20-Poly1305 under a device-local generated key
//! stored beside the data) is a convenience against casual inspection, not a
//! security boundary: anyone with the data directory also has the key.
//!
//! # Architecture
//!
//! ```text
//! core (domain, traits)
//!          │
//!          ▼
//! storage-local (this crate)
//!          │
//!          ▼
//!   <data dir>/*.vault
//! ```

pub mod errors;
pub mod goals;
pub mod metrics;
pub mod settings;
pub mod vault;

pub use errors::StorageError;
pub use goals::GoalRepository;
pub use metrics::MetricRepository;
pub use settings::SettingsRepository;
pub use vault::LocalVault;

// Re-export from bodyfolio-core for convenience
pub use bodyfolio_core::errors::{Error, Result, StoreError};
