//! Plans module - plan derivation, savings plan records, and the plan service.

pub mod plan_calculator;
mod plans_model;
mod plans_service;
mod plans_traits;

#[cfg(test)]
mod plans_service_tests;

pub use plan_calculator::{derive_plan, generate_initial_missions, SavingsTargets};
pub use plans_model::{CreatePlanRequest, NewSavingsPlan, Plan, PlanMission, SavingsPlan};
pub use plans_service::PlanService;
pub use plans_traits::{PlanServiceTrait, SavingsPlanRepositoryTrait};
