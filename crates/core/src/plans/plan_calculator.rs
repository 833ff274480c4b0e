//! Plan derivation: savings targets, countdown, progress, and the weekly
//! mission schedule of a goal.
//!
//! Everything here is pure. Callers pass `now` so results are reproducible.

use chrono::{DateTime, Utc};

use super::plans_model::{Plan, PlanMission};
use crate::constants::MISSIONS_PER_MONTH;
use crate::errors::{Error, Result};
use crate::goals::Goal;
use crate::missions::{mission_text, MissionSpec, WeeklyMission};
use crate::utils::time_utils::{add_months, days_until};

/// Monthly and weekly savings needed to reach a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsTargets {
    pub monthly_savings: f64,
    pub weekly_savings: f64,
}

impl SavingsTargets {
    /// `monthly = amount / period`, `weekly = monthly / 4`. No rounding.
    pub fn compute(goal_amount: f64, goal_period: u32) -> Result<Self> {
        if !goal_amount.is_finite() || goal_amount <= 0.0 {
            return Err(Error::invalid_input("Goal amount must be greater than 0"));
        }
        if goal_period == 0 {
            return Err(Error::invalid_input("Goal period must be greater than 0"));
        }
        let monthly_savings = goal_amount / f64::from(goal_period);
        Ok(Self {
            monthly_savings,
            weekly_savings: monthly_savings / f64::from(MISSIONS_PER_MONTH),
        })
    }
}

/// `created_at` plus `goal_period` calendar months.
pub fn target_date(created_at: DateTime<Utc>, goal_period: u32) -> Result<DateTime<Utc>> {
    add_months(created_at, goal_period).ok_or_else(|| {
        Error::invalid_input(format!(
            "Target date {} months after {} is out of range",
            goal_period, created_at
        ))
    })
}

/// `current / target * 100`, left unclamped.
pub fn progress_percentage(current_amount: f64, goal_amount: f64) -> f64 {
    current_amount / goal_amount * 100.0
}

/// Builds the mission schedule for a new goal: `period * 4` missions,
/// week numbers `1..=4 * period`, texts cycling through the catalog.
pub fn generate_initial_missions(goal_period: u32, weekly_savings: f64) -> Vec<MissionSpec> {
    let total_weeks = goal_period.saturating_mul(MISSIONS_PER_MONTH);
    (0..total_weeks)
        .map(|i| MissionSpec {
            week_number: i + 1,
            mission_text: mission_text(i as usize, weekly_savings),
            target_amount: weekly_savings,
            is_completed: false,
        })
        .collect()
}

/// Derives the display plan of a goal at instant `now`.
///
/// Mission target amounts are recomputed from the goal; stored values are
/// ignored. Missions are returned ordered by week number.
pub fn derive_plan(goal: &Goal, missions: &[WeeklyMission], now: DateTime<Utc>) -> Result<Plan> {
    goal.validate()?;
    let targets = SavingsTargets::compute(goal.goal_amount, goal.goal_period)?;
    let target_date = target_date(goal.created_at, goal.goal_period)?;

    let mut weekly_missions: Vec<PlanMission> = missions
        .iter()
        .map(|m| PlanMission {
            id: m.id.clone(),
            description: m.mission_text.clone(),
            target_amount: targets.weekly_savings,
            week_number: m.week_number,
            is_completed: m.is_completed,
            completed_at: m.completed_at,
        })
        .collect();
    weekly_missions.sort_by_key(|m| m.week_number);

    Ok(Plan {
        id: goal.id.clone(),
        goal_name: goal.goal_name.clone(),
        goal_amount: goal.goal_amount,
        goal_period: goal.goal_period,
        monthly_savings: targets.monthly_savings,
        weekly_savings: targets.weekly_savings,
        d_day: days_until(target_date, now),
        current_savings: goal.current_amount,
        progress_percentage: progress_percentage(goal.current_amount, goal.goal_amount),
        weekly_missions,
        created_at: goal.created_at,
        target_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STATIC_MISSIONS;
    use chrono::{Duration, TimeZone};

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 8, 30, 0).unwrap()
    }

    fn goal(amount: f64, period: u32, current: f64) -> Goal {
        Goal {
            id: "goal-1".to_string(),
            user_id: "user-1".to_string(),
            goal_name: "New laptop".to_string(),
            goal_amount: amount,
            goal_period: period,
            current_amount: current,
            is_active: true,
            created_at: created(),
            updated_at: created(),
        }
    }

    fn stored_missions(goal: &Goal, stored_target: f64) -> Vec<WeeklyMission> {
        generate_initial_missions(goal.goal_period, stored_target)
            .into_iter()
            .map(|spec| WeeklyMission {
                id: format!("mission-{}", spec.week_number),
                goal_id: goal.id.clone(),
                user_id: goal.user_id.clone(),
                week_number: spec.week_number,
                mission_text: spec.mission_text,
                target_amount: spec.target_amount,
                is_completed: false,
                completed_at: None,
                created_at: goal.created_at,
                updated_at: goal.created_at,
            })
            .collect()
    }

    #[test]
    fn test_two_million_over_ten_months() {
        let targets = SavingsTargets::compute(2_000_000.0, 10).unwrap();
        assert_eq!(targets.monthly_savings, 200_000.0);
        assert_eq!(targets.weekly_savings, 50_000.0);

        let missions = generate_initial_missions(10, targets.weekly_savings);
        assert_eq!(missions.len(), 40);
        assert!(missions[0].mission_text.contains("50,000"));
        assert_eq!(missions[1].mission_text, STATIC_MISSIONS[0]);
        assert!(missions.iter().all(|m| m.target_amount == 50_000.0));
        assert!(missions.iter().all(|m| !m.is_completed));
    }

    #[test]
    fn test_savings_targets_reject_invalid_input() {
        assert!(SavingsTargets::compute(100.0, 0).is_err());
        assert!(SavingsTargets::compute(0.0, 3).is_err());
        assert!(SavingsTargets::compute(f64::NAN, 3).is_err());
    }

    #[test]
    fn test_progress_half_way() {
        let plan = derive_plan(&goal(100.0, 3, 50.0), &[], created()).unwrap();
        assert_eq!(plan.progress_percentage, 50.0);
    }

    #[test]
    fn test_progress_is_not_clamped() {
        assert_eq!(progress_percentage(0.0, 100.0), 0.0);
        assert_eq!(progress_percentage(100.0, 100.0), 100.0);
        assert_eq!(progress_percentage(150.0, 100.0), 150.0);
    }

    #[test]
    fn test_target_date_and_countdown() {
        let g = goal(1200.0, 3, 0.0);
        let plan = derive_plan(&g, &[], created()).unwrap();
        assert_eq!(
            plan.target_date,
            Utc.with_ymd_and_hms(2024, 4, 10, 8, 30, 0).unwrap()
        );
        // Jan 10 -> Apr 10 in a leap year.
        assert_eq!(plan.d_day, 91);

        let an_hour_later = derive_plan(&g, &[], created() + Duration::hours(1)).unwrap();
        assert_eq!(an_hour_later.d_day, 91);
    }

    #[test]
    fn test_countdown_floors_at_zero_when_overdue() {
        let g = goal(1200.0, 1, 0.0);
        let plan = derive_plan(&g, &[], created() + Duration::days(400)).unwrap();
        assert_eq!(plan.d_day, 0);
    }

    #[test]
    fn test_mission_targets_recomputed_from_goal() {
        let g = goal(1200.0, 3, 0.0);
        let missions = stored_missions(&g, 999.0);
        let plan = derive_plan(&g, &missions, created()).unwrap();
        assert_eq!(plan.weekly_savings, 100.0);
        assert!(plan.weekly_missions.iter().all(|m| m.target_amount == 100.0));
    }

    #[test]
    fn test_plan_missions_ordered_by_week() {
        let g = goal(1200.0, 2, 0.0);
        let mut missions = stored_missions(&g, 150.0);
        missions.reverse();
        let plan = derive_plan(&g, &missions, created()).unwrap();
        let weeks: Vec<u32> = plan.weekly_missions.iter().map(|m| m.week_number).collect();
        assert_eq!(weeks, (1..=8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_derive_rejects_broken_goal() {
        assert!(derive_plan(&goal(100.0, 0, 0.0), &[], created()).is_err());
        assert!(derive_plan(&goal(-1.0, 3, 0.0), &[], created()).is_err());
        assert!(derive_plan(&goal(100.0, 3, -1.0), &[], created()).is_err());
    }

    #[test]
    fn test_plan_serializes_like_the_client_expects() {
        let plan = derive_plan(&goal(100.0, 3, 50.0), &[], created()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["dDay"], plan.d_day);
        assert_eq!(json["progressPercentage"], 50.0);
        assert!(json["weeklyMissions"].is_array());
        assert!(json.get("targetDate").is_some());
    }
}
