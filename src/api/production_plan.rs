use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{error::ApiError, AppState};
use crate::{domain::ProductionPlan, planner};

/// POST /productionplan
///
/// The body is taken as untyped JSON so that missing or mistyped fields are
/// reported by the planner itself. Solving runs on the blocking pool.
pub async fn production_plan(
    State(st): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ProductionPlan>, ApiError> {
    let Json(payload) = payload?;
    let limits = st.limits;

    let plan = tokio::task::spawn_blocking(move || planner::solve(payload, &limits))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "planner worker died");
            ApiError::ServiceUnavailable(format!("planner worker died: {e}"))
        })??;

    Ok(Json(plan))
}
