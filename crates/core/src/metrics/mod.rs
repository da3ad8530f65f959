//! Metrics module - measurement models, services, and traits.

mod model;
mod service;
mod traits;

pub use model::{DataStats, Direction, HealthMetric, MetricType, NewHealthMetric};
pub use service::MetricService;
pub use traits::{MetricRepositoryTrait, MetricServiceTrait};
