//! Mission repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::missions_model::{NewWeeklyMission, WeeklyMission};
use crate::errors::Result;

/// Trait defining the contract for weekly mission persistence.
#[async_trait]
pub trait MissionRepositoryTrait: Send + Sync {
    /// Inserts one mission and returns it with its generated id.
    async fn insert_mission(&self, new_mission: NewWeeklyMission) -> Result<WeeklyMission>;

    fn get_mission(&self, mission_id: &str) -> Result<WeeklyMission>;

    /// Missions of a goal ordered by week number.
    fn list_missions_for_goal(&self, goal_id: &str) -> Result<Vec<WeeklyMission>>;

    /// Writes the completion flag and timestamp of one mission.
    async fn set_mission_completion(
        &self,
        mission_id: &str,
        is_completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<WeeklyMission>;

    /// Deletes every mission of a goal. Returns the number of deleted records.
    async fn delete_missions_for_goal(&self, goal_id: &str) -> Result<usize>;
}
