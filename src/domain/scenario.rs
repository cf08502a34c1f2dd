use serde::Serialize;

use super::{Plant, ProductionPlanRequest};

/// One planning request, ready for the optimizer.
///
/// Plants keep their input order; every per-plant vector the optimizer
/// produces is indexed by that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub load_mw: f64,
    pub gas_price: f64,
    pub kerosine_price: f64,
    /// Available fraction of rated wind capacity, in `[0, 1]`.
    pub wind_fraction: f64,
    pub plants: Vec<Plant>,
}

impl Scenario {
    pub fn new(load_mw: f64, gas_price: f64, kerosine_price: f64, wind_fraction: f64, plants: Vec<Plant>) -> Self {
        Self {
            load_mw,
            gas_price,
            kerosine_price,
            wind_fraction,
            plants,
        }
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

impl From<ProductionPlanRequest> for Scenario {
    fn from(request: ProductionPlanRequest) -> Self {
        let plants = request
            .powerplants
            .into_iter()
            .map(|spec| Plant::new(spec.name, spec.kind, spec.efficiency, spec.pmin, spec.pmax))
            .collect();

        Self::new(
            request.load,
            request.fuels.gas_euro_per_mwh,
            request.fuels.kerosine_euro_per_mwh,
            request.fuels.wind_percent / 100.0,
            plants,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlantKind;
    use serde_json::json;

    #[test]
    fn test_from_request_keeps_order_and_scales_wind() {
        let request: ProductionPlanRequest = serde_json::from_value(json!({
            "load": 100,
            "fuels": {"gas(euro/MWh)": 10, "kerosine(euro/MWh)": 40, "wind(%)": 25},
            "powerplants": [
                {"name": "w", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 80},
                {"name": "g", "type": "gasfired", "efficiency": 0.5, "pmin": 10, "pmax": 200}
            ]
        }))
        .unwrap();

        let scenario = Scenario::from(request);
        assert_eq!(scenario.load_mw, 100.0);
        assert_eq!(scenario.wind_fraction, 0.25);
        assert_eq!(scenario.len(), 2);
        assert_eq!(scenario.plants[0].name, "w");
        assert_eq!(scenario.plants[1].kind, PlantKind::GasFired);
        assert_eq!(scenario.plants[1].pmin_mw, 10.0);
    }
}
