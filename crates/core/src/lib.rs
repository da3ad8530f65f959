//! Bodyfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Bodyfolio: the
//! goal-projection engine, the measurement and goal services, and the
//! repository traits they depend on. It is storage-agnostic; the traits are
//! implemented by the `storage-local` crate.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod metrics;
pub mod projection;
pub mod settings;
pub mod transfer;
pub mod utils;

// Re-export the engine entry points
pub use projection::{
    apply_progress_update, compute_body_composition_trajectory, compute_linear_trajectory,
    is_achieved,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
