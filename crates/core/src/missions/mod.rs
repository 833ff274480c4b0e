//! Weekly missions - domain models, mission catalog, and repository trait.

mod missions_catalog;
mod missions_model;
mod missions_traits;

pub use missions_catalog::{format_amount, mission_text};
pub use missions_model::{MissionSpec, NewWeeklyMission, WeeklyMission};
pub use missions_traits::MissionRepositoryTrait;
