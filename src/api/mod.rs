pub mod error;
pub mod health;
pub mod production_plan;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, optimizer::SolverLimits};
use error::ApiError;

pub const PRODUCTION_PLAN_PATH: &str = "/productionplan";

#[derive(Debug, Clone)]
pub struct AppState {
    pub limits: SolverLimits,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            limits: cfg.solver,
            started_at: Utc::now(),
        }
    }
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    Router::new()
        .route(PRODUCTION_PLAN_PATH, post(production_plan::production_plan))
        .route("/health", get(health::health_check))
        .fallback(unknown_path)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(cfg.server.request_timeout_secs))),
        )
        .layer(TraceLayer::new_for_http())
}

async fn unknown_path(uri: Uri) -> ApiError {
    ApiError::BadRequest(format!("no such path: {}", uri.path()))
}
