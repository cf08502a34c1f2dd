use serde::Serialize;
use strum::{AsRefStr, Display};
use tracing::{debug, info, warn};

use super::{exhaustive, greedy, SolverLimits};
use crate::domain::Scenario;
use crate::planner::PlanError;

/// Output assigned to every plant of a scenario, indexed by input order.
///
/// Each stage, and each combination tried by the exhaustive search, works on
/// its own `Dispatch`; nothing is carried over between trials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dispatch {
    outputs_mw: Vec<f64>,
}

impl Dispatch {
    pub fn zeroed(len: usize) -> Self {
        Self {
            outputs_mw: vec![0.0; len],
        }
    }

    pub fn get(&self, index: usize) -> f64 {
        self.outputs_mw[index]
    }

    pub fn set(&mut self, index: usize, power_mw: f64) {
        self.outputs_mw[index] = power_mw;
    }

    pub fn outputs(&self) -> &[f64] {
        &self.outputs_mw
    }

    pub fn total(&self) -> f64 {
        self.outputs_mw.iter().sum()
    }
}

/// Result of one solver stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    /// The stage produced a dispatch matching the load.
    Solved(Dispatch),
    /// The stage found nothing; hand over to the next one.
    Continue,
}

/// Which stage produced the returned dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Resolution {
    First,
    Second,
    Third,
    /// No combination matches the load; the dispatch is the all-at-maximum fallback.
    Unsolved,
}

impl Resolution {
    pub fn is_solved(self) -> bool {
        !matches!(self, Resolution::Unsolved)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub dispatch: Dispatch,
    pub resolution: Resolution,
}

/// Runs the three solver stages in order and stops at the first exact match.
#[derive(Debug, Clone, Default)]
pub struct ProductionOptimizer {
    pub limits: SolverLimits,
}

impl ProductionOptimizer {
    pub fn new(limits: SolverLimits) -> Self {
        Self { limits }
    }

    pub fn optimize(&self, scenario: &Scenario) -> Result<Solution, PlanError> {
        let fill = greedy::merit_order_fill(scenario);
        if let Attempt::Solved(dispatch) = fill.attempt(scenario) {
            return Ok(self.resolved(dispatch, Resolution::First));
        }

        debug!(
            power_mw = fill.power_mw,
            residual_mw = fill.residual_mw(scenario),
            unused = fill.unused.len(),
            "merit-order fill left a residual"
        );
        if let Attempt::Solved(dispatch) = greedy::plug_residual(scenario, &fill) {
            return Ok(self.resolved(dispatch, Resolution::Second));
        }

        self.limits.check_exhaustive(scenario.len())?;
        match exhaustive::search(scenario) {
            Attempt::Solved(dispatch) => Ok(self.resolved(dispatch, Resolution::Third)),
            Attempt::Continue => {
                warn!(load_mw = scenario.load_mw, "failed to solve the constraints");
                Ok(Solution {
                    dispatch: exhaustive::fallback(scenario),
                    resolution: Resolution::Unsolved,
                })
            }
        }
    }

    fn resolved(&self, dispatch: Dispatch, resolution: Resolution) -> Solution {
        info!(stage = resolution.as_ref(), "constraints solved");
        Solution {
            dispatch,
            resolution,
        }
    }
}
