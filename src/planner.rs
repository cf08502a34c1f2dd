//! Entry point turning a request payload into a production plan.

use thiserror::Error;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::{ProductionPlan, ProductionPlanRequest, Scenario};
use crate::optimizer::{ProductionOptimizer, SolverLimits};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),
    #[error("Fleet of {units} units exceeds the exhaustive search limit of {limit}")]
    FleetTooLarge { units: usize, limit: usize },
}

/// Solves a raw JSON request. Missing or mistyped fields surface as
/// [`PlanError::MalformedPayload`].
pub fn solve(payload: serde_json::Value, limits: &SolverLimits) -> Result<ProductionPlan, PlanError> {
    let request: ProductionPlanRequest = serde_json::from_value(payload)?;
    solve_request(request, limits)
}

#[instrument(skip_all, fields(load = request.load, plants = request.powerplants.len()))]
pub fn solve_request(request: ProductionPlanRequest, limits: &SolverLimits) -> Result<ProductionPlan, PlanError> {
    request.validate()?;
    let scenario = Scenario::from(request);

    let solution = ProductionOptimizer::new(*limits).optimize(&scenario)?;
    let plan = ProductionPlan::from_dispatch(&scenario, &solution.dispatch);

    if solution.resolution.is_solved() {
        info!(resolution = %solution.resolution, power_mw = plan.total_power(), "production plan ready");
    } else {
        warn!(
            power_mw = plan.total_power(),
            load_mw = scenario.load_mw,
            "returning unsolved fallback plan"
        );
    }
    Ok(plan)
}
