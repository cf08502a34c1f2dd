use tracing::debug;

use super::{effective_max, merit_order, total_cost, Attempt, Dispatch};
use crate::domain::Scenario;

/// Relative cost difference below which two combinations are tied.
const COST_TOLERANCE: f64 = 1e-9;

/// Tries every on/off combination of the fleet and keeps the cheapest one that
/// can meet the load exactly.
///
/// Combination `c` switches on the `k`-th plant in merit order when bit
/// `n - 1 - k` of `c` is set, so the first plant in merit order is the most
/// significant flag. On equal cost the combination enumerated first wins.
///
/// Runs in O(2^n · n log n); callers bound `n` through
/// [`super::SolverLimits`].
pub fn search(scenario: &Scenario) -> Attempt {
    let order = merit_order(scenario, 0..scenario.len());
    let n = order.len();
    let mut best: Option<(f64, Dispatch)> = None;
    let mut feasible = 0usize;

    for combination in 0..(1u64 << n) {
        let on: Vec<usize> = order
            .iter()
            .enumerate()
            .filter(|(k, _)| combination & (1 << (n - 1 - k)) != 0)
            .map(|(_, &i)| i)
            .collect();

        let Some(dispatch) = commit(scenario, &on) else {
            continue;
        };
        feasible += 1;

        let cost = total_cost(scenario, &dispatch);
        if best.as_ref().map_or(true, |(best_cost, _)| is_cheaper(cost, *best_cost)) {
            best = Some((cost, dispatch));
        }
    }

    debug!(combinations = 1u64 << n, feasible, "exhaustive search finished");
    match best {
        Some((cost, dispatch)) => {
            debug!(cost, "cheapest feasible combination");
            Attempt::Solved(dispatch)
        }
        None => Attempt::Continue,
    }
}

/// Strictly cheaper by more than summation noise. Combinations whose costs only
/// differ in the last bits count as equal, so the earlier one is kept.
fn is_cheaper(cost: f64, best_cost: f64) -> bool {
    cost < best_cost - COST_TOLERANCE * best_cost.abs().max(1.0)
}

/// Dispatch for one combination of switched-on plants, or `None` when the
/// combination cannot meet the load.
fn commit(scenario: &Scenario, on: &[usize]) -> Option<Dispatch> {
    let load = scenario.load_mw;
    let mut dispatch = Dispatch::zeroed(scenario.len());
    let mut floor = 0.0;
    let mut adjustable = Vec::with_capacity(on.len());

    for &i in on {
        let plant = &scenario.plants[i];
        let p = if plant.kind.is_adjustable() {
            adjustable.push(i);
            plant.pmin_mw
        } else {
            effective_max(plant, scenario)
        };
        dispatch.set(i, p);
        floor += p;
    }

    let adjustable = merit_order(scenario, adjustable);
    // Accumulated in the same order and the same way as the walk below, so a
    // ceiling at or above the load guarantees the walk crosses it.
    let ceiling = adjustable.iter().fold(floor, |acc, &i| {
        let plant = &scenario.plants[i];
        acc + (plant.pmax_mw - plant.pmin_mw)
    });
    if floor > load || ceiling < load {
        return None;
    }

    water_fill(scenario, &adjustable, floor, &mut dispatch);
    Some(dispatch)
}

/// Raises the adjustable plants to `pmax` in merit order until the load is
/// reached. The plant that crosses the load is dialed back to hit it exactly;
/// plants after it stay at `pmin`.
fn water_fill(scenario: &Scenario, adjustable: &[usize], floor: f64, dispatch: &mut Dispatch) {
    let load = scenario.load_mw;
    let mut power = floor;
    if power >= load {
        return;
    }

    for &i in adjustable {
        let plant = &scenario.plants[i];
        let current = dispatch.get(i);
        let raised = power + (plant.pmax_mw - current);
        if raised >= load {
            dispatch.set(i, load - (power - current));
            return;
        }
        dispatch.set(i, plant.pmax_mw);
        power = raised;
    }

    panic!(
        "water-filling ended at {power} MW below load {load} MW for a combination that passed the feasibility check"
    );
}

/// Every plant at its effective maximum. Returned unchanged when no combination
/// matches the load, even though it generally over- or under-supplies.
pub fn fallback(scenario: &Scenario) -> Dispatch {
    let mut dispatch = Dispatch::zeroed(scenario.len());
    for (i, plant) in scenario.plants.iter().enumerate() {
        dispatch.set(i, effective_max(plant, scenario));
    }
    dispatch
}
