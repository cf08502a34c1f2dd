use super::{effective_max, merit_order, round_to_tenth, supports_exactly, Attempt, Dispatch};
use crate::domain::Scenario;

/// State left by the merit-order fill.
#[derive(Debug, Clone, PartialEq)]
pub struct MeritFill {
    pub dispatch: Dispatch,
    pub power_mw: f64,
    /// Plants that would have overshot the load, in merit order.
    pub unused: Vec<usize>,
}

impl MeritFill {
    pub fn residual_mw(&self, scenario: &Scenario) -> f64 {
        scenario.load_mw - self.power_mw
    }

    pub fn attempt(&self, scenario: &Scenario) -> Attempt {
        if self.power_mw == scenario.load_mw {
            Attempt::Solved(self.dispatch.clone())
        } else {
            Attempt::Continue
        }
    }
}

/// Runs every plant at its effective maximum in merit order, skipping any plant
/// that would push the running total above the load. A skipped plant leaves the
/// total untouched, so smaller plants further down may still fit.
pub fn merit_order_fill(scenario: &Scenario) -> MeritFill {
    let mut dispatch = Dispatch::zeroed(scenario.len());
    let mut power_mw = 0.0;
    let mut unused = Vec::new();

    for i in merit_order(scenario, 0..scenario.len()) {
        let p = effective_max(&scenario.plants[i], scenario);
        power_mw += p;
        if power_mw > scenario.load_mw {
            power_mw -= p;
            unused.push(i);
        } else {
            dispatch.set(i, p);
        }
    }

    MeritFill {
        dispatch,
        power_mw,
        unused,
    }
}

/// Tries to cover the residual load with a single plant skipped by the fill.
/// The first skipped plant, in merit order, that can run at exactly the
/// residual wins.
pub fn plug_residual(scenario: &Scenario, fill: &MeritFill) -> Attempt {
    let residual_mw = fill.residual_mw(scenario);
    let plug = fill
        .unused
        .iter()
        .copied()
        .find(|&i| supports_exactly(&scenario.plants[i], residual_mw, scenario));

    match plug {
        Some(i) => {
            let mut dispatch = fill.dispatch.clone();
            dispatch.set(i, round_to_tenth(residual_mw));
            Attempt::Solved(dispatch)
        }
        None => Attempt::Continue,
    }
}
