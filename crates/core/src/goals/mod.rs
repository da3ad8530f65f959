//! Goals module - goal models, trajectory ownership, services, and traits.

mod model;
mod service;
mod traits;

pub use model::{Goal, MonthlyGoal, NewGoal, WeeklyGoal};
pub use service::GoalService;
pub use traits::{GoalRepositoryTrait, GoalServiceTrait};
