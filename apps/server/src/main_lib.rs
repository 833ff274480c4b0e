use std::sync::Arc;

use crate::{
    auth::AuthManager,
    config::Config,
    identity::{LoggingIdentityProvider, RemoteIdentityProvider},
};
use savemission_core::{
    plans::{PlanService, PlanServiceTrait},
    users::{IdentityProviderTrait, UserService, UserServiceTrait},
};
use savemission_storage_sqlite::{
    db::{self, write_actor},
    goals::GoalRepository,
    missions::MissionRepository,
    plans::SavingsPlanRepository,
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub plan_service: Arc<dyn PlanServiceTrait + Send + Sync>,
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let mission_repo = Arc::new(MissionRepository::new(pool.clone(), writer.clone()));
    let savings_plan_repo = Arc::new(SavingsPlanRepository::new(pool.clone(), writer.clone()));
    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));

    let plan_service = Arc::new(PlanService::new(
        goal_repo,
        mission_repo,
        savings_plan_repo,
    ));

    let identity_provider: Arc<dyn IdentityProviderTrait> =
        match (&config.identity_admin_url, &config.identity_admin_token) {
            (Some(url), Some(token)) => {
                tracing::info!("Identity admin API configured at {}", url);
                Arc::new(RemoteIdentityProvider::new(url.clone(), token.clone()))
            }
            _ => Arc::new(LoggingIdentityProvider),
        };
    let user_service = Arc::new(UserService::new(user_repo, identity_provider));

    Ok(Arc::new(AppState {
        plan_service,
        user_service,
        auth: Arc::new(AuthManager::new(&config.jwt_secret)),
    }))
}
