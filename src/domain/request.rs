use std::borrow::Cow;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::PlantKind;

/// Body of `POST /productionplan`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_names"))]
pub struct ProductionPlanRequest {
    #[validate(range(min = 0.0))]
    pub load: f64,
    #[validate(nested)]
    pub fuels: Fuels,
    #[validate(nested)]
    pub powerplants: Vec<PowerPlantSpec>,
}

/// Market conditions. Extra keys (e.g. `co2(euro/ton)`) are accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Fuels {
    #[serde(rename = "gas(euro/MWh)")]
    #[validate(range(min = 0.0))]
    pub gas_euro_per_mwh: f64,
    #[serde(rename = "kerosine(euro/MWh)")]
    #[validate(range(min = 0.0))]
    pub kerosine_euro_per_mwh: f64,
    #[serde(rename = "wind(%)")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub wind_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_envelope"))]
pub struct PowerPlantSpec {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlantKind,
    pub efficiency: f64,
    #[validate(range(min = 0.0))]
    pub pmin: f64,
    pub pmax: f64,
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

fn validate_envelope(plant: &PowerPlantSpec) -> Result<(), ValidationError> {
    if !(plant.pmax >= plant.pmin) {
        return Err(invalid(
            "envelope",
            format!("{}: pmax {} is below pmin {}", plant.name, plant.pmax, plant.pmin),
        ));
    }
    if plant.kind.is_adjustable() && !(plant.efficiency > 0.0) {
        return Err(invalid(
            "efficiency",
            format!("{}: efficiency must be positive, got {}", plant.name, plant.efficiency),
        ));
    }
    Ok(())
}

fn validate_unique_names(request: &ProductionPlanRequest) -> Result<(), ValidationError> {
    match request.powerplants.iter().map(|p| p.name.as_str()).duplicates().next() {
        Some(name) => Err(invalid("duplicate_name", format!("plant name {name} is used twice"))),
        None => Ok(()),
    }
}
