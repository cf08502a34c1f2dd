use serde::{Deserialize, Serialize};

use super::Scenario;
use crate::optimizer::{round_to_tenth, Dispatch};

/// Response body of `POST /productionplan`: one entry per plant, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionPlan {
    pub entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    pub p: f64,
}

impl ProductionPlan {
    pub fn from_dispatch(scenario: &Scenario, dispatch: &Dispatch) -> Self {
        let entries = scenario
            .plants
            .iter()
            .zip(dispatch.outputs())
            .map(|(plant, &p)| PlanEntry {
                name: plant.name.clone(),
                p: round_to_tenth(p),
            })
            .collect();
        Self { entries }
    }

    pub fn total_power(&self) -> f64 {
        self.entries.iter().map(|e| e.p).sum()
    }

    pub fn power_of(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.p)
    }
}
