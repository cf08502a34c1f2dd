use ordered_float::OrderedFloat;

use super::Dispatch;
use crate::domain::{Plant, PlantKind, Scenario};

/// Economic priority of a plant, compared lexicographically and used descending:
/// wind first, then the best MWh-per-euro ratio, then the larger rated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MeritKey {
    pub is_wind: bool,
    pub cost_efficiency: OrderedFloat<f64>,
    pub pmax_mw: OrderedFloat<f64>,
}

/// Rounds the exact binary value to one decimal place, ties to even.
///
/// Scaling by ten first is not equivalent: 61 × 0.95 is stored as
/// 57.94999…, which becomes exactly 579.5 once multiplied.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Fuel price paid by the plant, in euro per MWh of fuel. Wind burns nothing.
pub fn fuel_price(plant: &Plant, scenario: &Scenario) -> f64 {
    match plant.kind {
        PlantKind::GasFired => scenario.gas_price,
        PlantKind::Turbojet => scenario.kerosine_price,
        PlantKind::WindTurbine => 0.0,
    }
}

pub fn economic_priority(plant: &Plant, scenario: &Scenario) -> MeritKey {
    let cost_efficiency = if plant.kind.is_wind() {
        0.0
    } else {
        plant.efficiency / fuel_price(plant, scenario)
    };

    MeritKey {
        is_wind: plant.kind.is_wind(),
        cost_efficiency: OrderedFloat(cost_efficiency),
        pmax_mw: OrderedFloat(plant.pmax_mw),
    }
}

/// Sorts plant indices by descending merit. The sort is stable, so plants with
/// identical keys keep their relative order.
pub fn merit_order(scenario: &Scenario, indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut order: Vec<usize> = indices.into_iter().collect();
    order.sort_by_cached_key(|&i| std::cmp::Reverse(economic_priority(&scenario.plants[i], scenario)));
    order
}

/// Highest output the plant can deliver right now. For wind this is the rated
/// output scaled by the wind fraction.
pub fn effective_max(plant: &Plant, scenario: &Scenario) -> f64 {
    match plant.kind {
        PlantKind::WindTurbine => round_to_tenth(plant.pmax_mw * scenario.wind_fraction),
        PlantKind::GasFired | PlantKind::Turbojet => plant.pmax_mw,
    }
}

/// Whether the plant alone can deliver exactly `residual_mw`.
pub fn supports_exactly(plant: &Plant, residual_mw: f64, scenario: &Scenario) -> bool {
    if residual_mw == 0.0 {
        return true;
    }
    match plant.kind {
        PlantKind::WindTurbine => residual_mw == effective_max(plant, scenario),
        PlantKind::GasFired | PlantKind::Turbojet => {
            plant.pmin_mw <= residual_mw && residual_mw <= plant.pmax_mw
        }
    }
}

pub fn fuel_cost(plant: &Plant, power_mw: f64, scenario: &Scenario) -> f64 {
    match plant.kind {
        PlantKind::WindTurbine => 0.0,
        PlantKind::GasFired | PlantKind::Turbojet => {
            power_mw * fuel_price(plant, scenario) / plant.efficiency
        }
    }
}

/// Fuel cost of a full dispatch, summed over every plant.
pub fn total_cost(scenario: &Scenario, dispatch: &Dispatch) -> f64 {
    scenario
        .plants
        .iter()
        .zip(dispatch.outputs())
        .map(|(plant, &p)| fuel_cost(plant, p, scenario))
        .sum()
}
