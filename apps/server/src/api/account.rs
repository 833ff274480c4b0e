use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, post},
    Json, Router,
};
use savemission_core::users::{AccountDeletion, UserProfile};

use crate::{auth::AuthenticatedUser, error::ApiResult, main_lib::AppState};

/// Called by clients after sign-in; creates the profile on first use.
async fn start_session(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<Json<UserProfile>> {
    let profile = state.user_service.ensure_profile(&user).await?;
    Ok(Json(profile))
}

async fn delete_account(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<Json<AccountDeletion>> {
    let deletion = state.user_service.delete_account(&user).await?;
    Ok(Json(deletion))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/session", post(start_session))
        .route("/account", delete(delete_account))
}
