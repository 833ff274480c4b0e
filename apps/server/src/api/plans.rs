use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use savemission_core::{
    goals::Goal,
    missions::WeeklyMission,
    plans::{CreatePlanRequest, Plan},
};
use serde::Deserialize;

use crate::{
    auth::AuthenticatedUser,
    error::{ApiJson, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MissionStatusUpdate {
    is_completed: bool,
}

#[derive(Deserialize)]
struct SavingsUpdate {
    amount: f64,
}

async fn get_plans(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<Json<Vec<Plan>>> {
    let plans = state.plan_service.get_plans(&user)?;
    Ok(Json(plans))
}

async fn get_plan(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<Json<Plan>> {
    let plan = state.plan_service.get_plan(&user, &goal_id)?;
    Ok(Json(plan))
}

async fn create_plan(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(request): ApiJson<CreatePlanRequest>,
) -> ApiResult<Json<Plan>> {
    let plan = state.plan_service.create_plan(&user, request).await?;
    Ok(Json(plan))
}

async fn update_mission(
    Path(mission_id): Path<String>,
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(update): ApiJson<MissionStatusUpdate>,
) -> ApiResult<Json<WeeklyMission>> {
    let mission = state
        .plan_service
        .update_mission_status(&user, &mission_id, update.is_completed)
        .await?;
    Ok(Json(mission))
}

async fn update_savings(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(update): ApiJson<SavingsUpdate>,
) -> ApiResult<Json<Goal>> {
    let goal = state
        .plan_service
        .update_savings_amount(&user, &goal_id, update.amount)
        .await?;
    Ok(Json(goal))
}

async fn deactivate_goal(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<StatusCode> {
    state.plan_service.deactivate_goal(&user, &goal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plans", get(get_plans).post(create_plan))
        .route("/plans/{goal_id}", get(get_plan))
        .route("/missions/{mission_id}", put(update_mission))
        .route("/goals/{goal_id}/savings", put(update_savings))
        .route("/goals/{goal_id}", delete(deactivate_goal))
}
