use serde::{Deserialize, Serialize};

use crate::planner::PlanError;

/// Largest fleet the exhaustive stage will ever enumerate, whatever the config says.
pub const HARD_MAX_EXHAUSTIVE_UNITS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverLimits {
    /// The exhaustive stage visits 2^n combinations; fleets above this size fail
    /// instead of blocking a worker for minutes.
    pub max_exhaustive_units: usize,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            max_exhaustive_units: 20,
        }
    }
}

impl SolverLimits {
    pub fn effective_max_units(&self) -> usize {
        self.max_exhaustive_units.min(HARD_MAX_EXHAUSTIVE_UNITS)
    }

    pub fn check_exhaustive(&self, units: usize) -> Result<(), PlanError> {
        let limit = self.effective_max_units();
        if units > limit {
            return Err(PlanError::FleetTooLarge { units, limit });
        }
        Ok(())
    }
}
