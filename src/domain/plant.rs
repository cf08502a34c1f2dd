use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Generation technology of a power plant.
///
/// Wind turbines burn no fuel and can only run at their wind-capped maximum or
/// not at all. The two thermal kinds are continuously adjustable between
/// `pmin` and `pmax`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlantKind {
    GasFired,
    Turbojet,
    WindTurbine,
}

impl PlantKind {
    pub fn is_wind(self) -> bool {
        matches!(self, PlantKind::WindTurbine)
    }

    /// Whether the output can be set anywhere inside `[pmin, pmax]`.
    pub fn is_adjustable(self) -> bool {
        !self.is_wind()
    }
}

/// One generating unit of a scenario. Immutable once built; the assigned
/// output lives in a [`crate::optimizer::Dispatch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plant {
    pub name: String,
    pub kind: PlantKind,
    pub efficiency: f64,
    pub pmin_mw: f64,
    pub pmax_mw: f64,
}

impl Plant {
    pub fn new(name: impl Into<String>, kind: PlantKind, efficiency: f64, pmin_mw: f64, pmax_mw: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            efficiency,
            pmin_mw,
            pmax_mw,
        }
    }

    pub fn gas_fired(name: impl Into<String>, efficiency: f64, pmin_mw: f64, pmax_mw: f64) -> Self {
        Self::new(name, PlantKind::GasFired, efficiency, pmin_mw, pmax_mw)
    }

    pub fn turbojet(name: impl Into<String>, efficiency: f64, pmin_mw: f64, pmax_mw: f64) -> Self {
        Self::new(name, PlantKind::Turbojet, efficiency, pmin_mw, pmax_mw)
    }

    pub fn wind_turbine(name: impl Into<String>, pmax_mw: f64) -> Self {
        Self::new(name, PlantKind::WindTurbine, 1.0, 0.0, pmax_mw)
    }
}
