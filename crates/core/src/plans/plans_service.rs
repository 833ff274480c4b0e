use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use log::{debug, error, warn};

use super::plan_calculator::{derive_plan, generate_initial_missions, SavingsTargets};
use super::plans_model::{CreatePlanRequest, NewSavingsPlan, Plan};
use super::plans_traits::{PlanServiceTrait, SavingsPlanRepositoryTrait};
use crate::errors::{Error, Result};
use crate::goals::{Goal, GoalRepositoryTrait, NewGoal};
use crate::missions::{MissionRepositoryTrait, NewWeeklyMission, WeeklyMission};
use crate::users::UserIdentity;

/// Service for creating and reading savings plans
pub struct PlanService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    mission_repository: Arc<dyn MissionRepositoryTrait>,
    savings_plan_repository: Arc<dyn SavingsPlanRepositoryTrait>,
}

impl PlanService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        mission_repository: Arc<dyn MissionRepositoryTrait>,
        savings_plan_repository: Arc<dyn SavingsPlanRepositoryTrait>,
    ) -> Self {
        Self {
            goal_repository,
            mission_repository,
            savings_plan_repository,
        }
    }

    /// Loads a goal and checks it belongs to `user`.
    fn owned_goal(&self, user: &UserIdentity, goal_id: &str) -> Result<Goal> {
        let goal = self.goal_repository.get_goal(goal_id)?;
        if goal.user_id != user.id {
            return Err(Error::not_found(format!("goal {goal_id}")));
        }
        Ok(goal)
    }

    fn plan_for(&self, goal: &Goal, now: DateTime<Utc>) -> Result<Plan> {
        let missions = self.mission_repository.list_missions_for_goal(&goal.id)?;
        derive_plan(goal, &missions, now)
    }

    /// Writes the savings plan record and every mission of a freshly
    /// inserted goal. Mission inserts are issued together and awaited as
    /// one batch.
    async fn write_schedule(
        &self,
        goal: &Goal,
        targets: SavingsTargets,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.savings_plan_repository
            .insert_savings_plan(NewSavingsPlan {
                goal_id: goal.id.clone(),
                user_id: goal.user_id.clone(),
                monthly_amount: targets.monthly_savings,
                weekly_amount: targets.weekly_savings,
                created_at: now,
            })
            .await?;

        let inserts = generate_initial_missions(goal.goal_period, targets.weekly_savings)
            .into_iter()
            .map(|spec| NewWeeklyMission::from_spec(spec, &goal.id, &goal.user_id, now))
            .map(|new_mission| self.mission_repository.insert_mission(new_mission));
        let results = join_all(inserts).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(
                "{} of {} mission inserts failed for goal {}",
                failed,
                results.len(),
                goal.id
            );
        }
        results.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(())
    }

    /// Removes whatever part of a goal's schedule was written, then the goal.
    async fn rollback_goal(&self, goal_id: &str) {
        if let Err(e) = self.mission_repository.delete_missions_for_goal(goal_id).await {
            error!("Rollback: failed to delete missions of goal {}: {}", goal_id, e);
        }
        if let Err(e) = self
            .savings_plan_repository
            .delete_savings_plans_for_goal(goal_id)
            .await
        {
            error!("Rollback: failed to delete savings plan of goal {}: {}", goal_id, e);
        }
        if let Err(e) = self.goal_repository.delete_goal(goal_id).await {
            error!("Rollback: failed to delete goal {}: {}", goal_id, e);
        }
    }
}

#[async_trait]
impl PlanServiceTrait for PlanService {
    fn get_plans(&self, user: &UserIdentity) -> Result<Vec<Plan>> {
        let now = Utc::now();
        self.goal_repository
            .list_active_goals(&user.id)?
            .iter()
            .map(|goal| self.plan_for(goal, now))
            .collect()
    }

    fn get_plan(&self, user: &UserIdentity, goal_id: &str) -> Result<Plan> {
        let goal = self.owned_goal(user, goal_id)?;
        self.plan_for(&goal, Utc::now())
    }

    async fn create_plan(&self, user: &UserIdentity, request: CreatePlanRequest) -> Result<Plan> {
        request.validate()?;
        let targets = SavingsTargets::compute(request.goal_amount, request.goal_period)?;
        let now = Utc::now();
        debug!(
            "Creating plan '{}' for user {}: {} over {} months",
            request.goal_name, user.id, request.goal_amount, request.goal_period
        );

        let goal = self
            .goal_repository
            .insert_goal(NewGoal {
                user_id: user.id.clone(),
                goal_name: request.goal_name.trim().to_string(),
                goal_amount: request.goal_amount,
                goal_period: request.goal_period,
                current_amount: 0.0,
                // Stays hidden until its whole schedule is written, so an
                // interrupted create never shows up as a plan.
                is_active: false,
                created_at: now,
            })
            .await?;

        let written = match self.write_schedule(&goal, targets, now).await {
            Ok(()) => self.goal_repository.set_goal_active(&goal.id, true).await,
            Err(e) => Err(e),
        };
        let goal = match written {
            Ok(goal) => goal,
            Err(e) => {
                warn!("Creating plan for goal {} failed, rolling back: {}", goal.id, e);
                self.rollback_goal(&goal.id).await;
                return Err(e);
            }
        };

        self.plan_for(&goal, Utc::now())
    }

    async fn update_mission_status(
        &self,
        user: &UserIdentity,
        mission_id: &str,
        is_completed: bool,
    ) -> Result<WeeklyMission> {
        let mission = self.mission_repository.get_mission(mission_id)?;
        if mission.user_id != user.id {
            return Err(Error::not_found(format!("mission {mission_id}")));
        }

        let toggled = mission.with_completion(is_completed, Utc::now());
        self.mission_repository
            .set_mission_completion(mission_id, toggled.is_completed, toggled.completed_at)
            .await
    }

    async fn update_savings_amount(
        &self,
        user: &UserIdentity,
        goal_id: &str,
        amount: f64,
    ) -> Result<Goal> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::invalid_input("Saved amount cannot be negative"));
        }
        self.owned_goal(user, goal_id)?;
        self.goal_repository.update_current_amount(goal_id, amount).await
    }

    async fn deactivate_goal(&self, user: &UserIdentity, goal_id: &str) -> Result<Goal> {
        self.owned_goal(user, goal_id)?;
        self.goal_repository.set_goal_active(goal_id, false).await
    }
}
