//! SQLite storage implementation for weekly missions.

mod model;
mod repository;

pub use model::{NewWeeklyMissionDB, WeeklyMissionDB};
pub use repository::MissionRepository;
