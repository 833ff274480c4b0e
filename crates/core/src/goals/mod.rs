//! Goals module - domain models and repository trait.

mod goals_model;
mod goals_traits;

pub use goals_model::{Goal, NewGoal};
pub use goals_traits::GoalRepositoryTrait;
