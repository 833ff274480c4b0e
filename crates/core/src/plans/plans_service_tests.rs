//! Tests for the plan service against in-memory repositories.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::*;
use crate::constants::STATIC_MISSIONS;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::{Goal, GoalRepositoryTrait, NewGoal};
use crate::missions::{MissionRepositoryTrait, NewWeeklyMission, WeeklyMission};
use crate::users::UserIdentity;

// ============== In-memory store ==============

#[derive(Default)]
struct InMemoryStore {
    goals: RwLock<Vec<Goal>>,
    missions: RwLock<Vec<WeeklyMission>>,
    savings_plans: RwLock<Vec<SavingsPlan>>,
    next_id: RwLock<u64>,
    fail_mission_week: Option<u32>,
    stall_mission_week: Option<u32>,
    fail_savings_plan: bool,
    goal_inserts: RwLock<usize>,
}

impl InMemoryStore {
    fn failing_on_week(week: u32) -> Self {
        Self {
            fail_mission_week: Some(week),
            ..Default::default()
        }
    }

    fn id(&self, prefix: &str) -> String {
        let mut next = self.next_id.write().unwrap();
        *next += 1;
        format!("{prefix}-{next}")
    }

    fn write_error(what: &str) -> Error {
        Error::Database(crate::errors::DatabaseError::QueryFailed(format!(
            "write of {what} rejected"
        )))
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryStore {
    async fn insert_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        *self.goal_inserts.write().unwrap() += 1;
        let goal = Goal {
            id: self.id("goal"),
            user_id: new_goal.user_id,
            goal_name: new_goal.goal_name,
            goal_amount: new_goal.goal_amount,
            goal_period: new_goal.goal_period,
            current_amount: new_goal.current_amount,
            is_active: new_goal.is_active,
            created_at: new_goal.created_at,
            updated_at: new_goal.created_at,
        };
        self.goals.write().unwrap().push(goal.clone());
        Ok(goal)
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goals
            .read()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| Error::not_found(goal_id))
    }

    fn list_active_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id && g.is_active)
            .cloned()
            .collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    async fn update_current_amount(&self, goal_id: &str, amount: f64) -> Result<Goal> {
        let mut goals = self.goals.write().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::not_found(goal_id))?;
        goal.current_amount = amount;
        Ok(goal.clone())
    }

    async fn set_goal_active(&self, goal_id: &str, is_active: bool) -> Result<Goal> {
        let mut goals = self.goals.write().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::not_found(goal_id))?;
        goal.is_active = is_active;
        Ok(goal.clone())
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        let mut goals = self.goals.write().unwrap();
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        Ok(before - goals.len())
    }
}

#[async_trait]
impl MissionRepositoryTrait for InMemoryStore {
    async fn insert_mission(&self, new_mission: NewWeeklyMission) -> Result<WeeklyMission> {
        if self.fail_mission_week == Some(new_mission.week_number) {
            return Err(Self::write_error("mission"));
        }
        if self.stall_mission_week == Some(new_mission.week_number) {
            std::future::pending::<()>().await;
        }
        let mission = WeeklyMission {
            id: self.id("mission"),
            goal_id: new_mission.goal_id,
            user_id: new_mission.user_id,
            week_number: new_mission.week_number,
            mission_text: new_mission.mission_text,
            target_amount: new_mission.target_amount,
            is_completed: new_mission.is_completed,
            completed_at: None,
            created_at: new_mission.created_at,
            updated_at: new_mission.created_at,
        };
        self.missions.write().unwrap().push(mission.clone());
        Ok(mission)
    }

    fn get_mission(&self, mission_id: &str) -> Result<WeeklyMission> {
        self.missions
            .read()
            .unwrap()
            .iter()
            .find(|m| m.id == mission_id)
            .cloned()
            .ok_or_else(|| Error::not_found(mission_id))
    }

    fn list_missions_for_goal(&self, goal_id: &str) -> Result<Vec<WeeklyMission>> {
        let mut missions: Vec<WeeklyMission> = self
            .missions
            .read()
            .unwrap()
            .iter()
            .filter(|m| m.goal_id == goal_id)
            .cloned()
            .collect();
        missions.sort_by_key(|m| m.week_number);
        Ok(missions)
    }

    async fn set_mission_completion(
        &self,
        mission_id: &str,
        is_completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<WeeklyMission> {
        let mut missions = self.missions.write().unwrap();
        let mission = missions
            .iter_mut()
            .find(|m| m.id == mission_id)
            .ok_or_else(|| Error::not_found(mission_id))?;
        mission.is_completed = is_completed;
        mission.completed_at = completed_at;
        Ok(mission.clone())
    }

    async fn delete_missions_for_goal(&self, goal_id: &str) -> Result<usize> {
        let mut missions = self.missions.write().unwrap();
        let before = missions.len();
        missions.retain(|m| m.goal_id != goal_id);
        Ok(before - missions.len())
    }
}

#[async_trait]
impl SavingsPlanRepositoryTrait for InMemoryStore {
    async fn insert_savings_plan(&self, new_plan: NewSavingsPlan) -> Result<SavingsPlan> {
        if self.fail_savings_plan {
            return Err(Self::write_error("savings plan"));
        }
        let plan = SavingsPlan {
            id: self.id("savings-plan"),
            goal_id: new_plan.goal_id,
            user_id: new_plan.user_id,
            monthly_amount: new_plan.monthly_amount,
            weekly_amount: new_plan.weekly_amount,
            created_at: new_plan.created_at,
            updated_at: new_plan.created_at,
        };
        self.savings_plans.write().unwrap().push(plan.clone());
        Ok(plan)
    }

    fn get_savings_plan_for_goal(&self, goal_id: &str) -> Result<SavingsPlan> {
        self.savings_plans
            .read()
            .unwrap()
            .iter()
            .find(|p| p.goal_id == goal_id)
            .cloned()
            .ok_or_else(|| Error::not_found(goal_id))
    }

    async fn delete_savings_plans_for_goal(&self, goal_id: &str) -> Result<usize> {
        let mut plans = self.savings_plans.write().unwrap();
        let before = plans.len();
        plans.retain(|p| p.goal_id != goal_id);
        Ok(before - plans.len())
    }
}

// ============== Helpers ==============

fn service_with(store: Arc<InMemoryStore>) -> PlanService {
    PlanService::new(store.clone(), store.clone(), store)
}

fn user(id: &str) -> UserIdentity {
    UserIdentity {
        id: id.to_string(),
        display_name: None,
        email: None,
    }
}

fn request(name: &str, amount: f64, period: u32) -> CreatePlanRequest {
    CreatePlanRequest {
        goal_name: name.to_string(),
        goal_amount: amount,
        goal_period: period,
    }
}

// ============== Tests ==============

#[tokio::test]
async fn test_create_plan_persists_goal_savings_plan_and_missions() {
    let store = Arc::new(InMemoryStore::default());
    let service = service_with(store.clone());

    let plan = service
        .create_plan(&user("u-1"), request("Trip to Jeju", 2_000_000.0, 10))
        .await
        .unwrap();

    assert_eq!(plan.goal_name, "Trip to Jeju");
    assert_eq!(plan.monthly_savings, 200_000.0);
    assert_eq!(plan.weekly_savings, 50_000.0);
    assert_eq!(plan.current_savings, 0.0);
    assert_eq!(plan.progress_percentage, 0.0);
    assert_eq!(plan.weekly_missions.len(), 40);
    assert!(plan.weekly_missions[0].description.contains("50,000"));
    assert_eq!(plan.weekly_missions[1].description, STATIC_MISSIONS[0]);
    let weeks: Vec<u32> = plan.weekly_missions.iter().map(|m| m.week_number).collect();
    assert_eq!(weeks, (1..=40).collect::<Vec<u32>>());
    assert!(plan.d_day > 0);

    let goal = store.get_goal(&plan.id).unwrap();
    assert_eq!(goal.user_id, "u-1");
    assert!(goal.is_active);

    let savings_plan = store.get_savings_plan_for_goal(&plan.id).unwrap();
    assert_eq!(savings_plan.monthly_amount, 200_000.0);
    assert_eq!(savings_plan.weekly_amount, 50_000.0);

    let missions = store.list_missions_for_goal(&plan.id).unwrap();
    assert_eq!(missions.len(), 40);
    assert!(missions.iter().all(|m| m.user_id == "u-1"));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_any_write() {
    let store = Arc::new(InMemoryStore::default());
    let service = service_with(store.clone());

    let err = service
        .create_plan(&user("u-1"), request("", 100.0, 3))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::MissingField(_))));

    let err = service
        .create_plan(&user("u-1"), request("Bike", 100.0, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert_eq!(*store.goal_inserts.read().unwrap(), 0);
}

#[tokio::test]
async fn test_partial_mission_batch_failure_rolls_back_everything() {
    let store = Arc::new(InMemoryStore::failing_on_week(7));
    let service = service_with(store.clone());

    let err = service
        .create_plan(&user("u-1"), request("Bike", 1200.0, 3))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Database(_)));

    assert!(store.goals.read().unwrap().is_empty());
    assert!(store.missions.read().unwrap().is_empty());
    assert!(store.savings_plans.read().unwrap().is_empty());
}

#[tokio::test]
async fn test_savings_plan_failure_rolls_back_goal() {
    let store = Arc::new(InMemoryStore {
        fail_savings_plan: true,
        ..Default::default()
    });
    let service = service_with(store.clone());

    assert!(service
        .create_plan(&user("u-1"), request("Bike", 1200.0, 3))
        .await
        .is_err());
    assert!(store.goals.read().unwrap().is_empty());
    assert!(store.missions.read().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_plans_lists_active_goals_newest_first() {
    let store = Arc::new(InMemoryStore::default());
    let service = service_with(store.clone());
    let me = user("u-1");

    let first = service.create_plan(&me, request("First", 100.0, 1)).await.unwrap();
    let second = service.create_plan(&me, request("Second", 100.0, 1)).await.unwrap();
    service
        .create_plan(&user("u-2"), request("Not mine", 100.0, 1))
        .await
        .unwrap();

    // Make the ordering independent of clock resolution.
    store
        .goals
        .write()
        .unwrap()
        .iter_mut()
        .filter(|g| g.id == first.id)
        .for_each(|g| g.created_at -= Duration::days(1));

    let plans = service.get_plans(&me).unwrap();
    let names: Vec<&str> = plans.iter().map(|p| p.goal_name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);

    service.deactivate_goal(&me, &second.id).await.unwrap();
    let plans = service.get_plans(&me).unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, first.id);
}

#[tokio::test]
async fn test_get_plan_recomputes_mission_targets() {
    let store = Arc::new(InMemoryStore::default());
    let service = service_with(store.clone());
    let me = user("u-1");
    let plan = service.create_plan(&me, request("Camera", 1200.0, 3)).await.unwrap();

    store
        .missions
        .write()
        .unwrap()
        .iter_mut()
        .for_each(|m| m.target_amount = 1.0);

    let reread = service.get_plan(&me, &plan.id).unwrap();
    assert!(reread.weekly_missions.iter().all(|m| m.target_amount == 100.0));
}

#[tokio::test]
async fn test_toggle_mission_sets_and_clears_completion() {
    let store = Arc::new(InMemoryStore::default());
    let service = service_with(store.clone());
    let me = user("u-1");
    let plan = service.create_plan(&me, request("Camera", 1200.0, 1)).await.unwrap();
    let target = plan.weekly_missions[2].id.clone();

    let done = service.update_mission_status(&me, &target, true).await.unwrap();
    assert!(done.is_completed);
    assert!(done.completed_at.is_some());

    let others = store.list_missions_for_goal(&plan.id).unwrap();
    assert_eq!(others.iter().filter(|m| m.is_completed).count(), 1);
    assert!(others
        .iter()
        .filter(|m| m.id != target)
        .all(|m| m.completed_at.is_none()));

    let reopened = service.update_mission_status(&me, &target, false).await.unwrap();
    assert!(!reopened.is_completed);
    assert!(reopened.completed_at.is_none());
}

#[tokio::test]
async fn test_update_savings_amount_drives_progress() {
    let store = Arc::new(InMemoryStore::default());
    let service = service_with(store);
    let me = user("u-1");
    let plan = service.create_plan(&me, request("Console", 100.0, 3)).await.unwrap();

    let goal = service.update_savings_amount(&me, &plan.id, 50.0).await.unwrap();
    assert_eq!(goal.current_amount, 50.0);
    assert_eq!(service.get_plan(&me, &plan.id).unwrap().progress_percentage, 50.0);

    service.update_savings_amount(&me, &plan.id, 130.0).await.unwrap();
    assert_eq!(service.get_plan(&me, &plan.id).unwrap().progress_percentage, 130.0);

    assert!(service
        .update_savings_amount(&me, &plan.id, -1.0)
        .await
        .is_err());
}

#[tokio::test]
async fn test_other_users_records_are_not_found() {
    let store = Arc::new(InMemoryStore::default());
    let service = service_with(store);
    let owner = user("u-1");
    let intruder = user("u-2");
    let plan = service.create_plan(&owner, request("Watch", 400.0, 1)).await.unwrap();
    let mission_id = plan.weekly_missions[0].id.clone();

    assert!(service.get_plan(&intruder, &plan.id).unwrap_err().is_not_found());
    assert!(service
        .update_mission_status(&intruder, &mission_id, true)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(service
        .update_savings_amount(&intruder, &plan.id, 10.0)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(service
        .deactivate_goal(&intruder, &plan.id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_interrupted_create_is_never_listed() {
    let store = Arc::new(InMemoryStore {
        stall_mission_week: Some(5),
        ..Default::default()
    });
    let service = service_with(store.clone());
    let me = user("u-1");

    let outcome = tokio::time::timeout(
        std::time::Duration::from_millis(50),
        service.create_plan(&me, request("Bike", 1200.0, 3)),
    )
    .await;
    assert!(outcome.is_err());

    // The goal and 11 of its 12 missions were written before the stall.
    assert_eq!(store.goals.read().unwrap().len(), 1);
    assert_eq!(store.missions.read().unwrap().len(), 11);
    assert!(service.get_plans(&me).unwrap().is_empty());
}

#[tokio::test]
async fn test_created_goal_is_active_once_schedule_is_written() {
    let store = Arc::new(InMemoryStore::default());
    let service = service_with(store.clone());
    let me = user("u-1");

    let plan = service.create_plan(&me, request("Bike", 1200.0, 3)).await.unwrap();
    assert!(store.get_goal(&plan.id).unwrap().is_active);
    assert_eq!(service.get_plans(&me).unwrap().len(), 1);
}
