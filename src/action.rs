use serde::{Deserialize, Serialize};

use crate::fuel::{round2, Stunt};

/// One entry of a vehicle's race history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Travel { km: f64 },
    Refuel { litres: f64 },
    Stunt { stunt: Stunt, fuel_left: f64 },
    Setback { km: f64, odometer: f64 },
}

impl Action {
    /// Human-readable line for the history of `vehicle`.
    pub fn describe(&self, vehicle: &str) -> String {
        match self {
            Action::Travel { km } => format!("{vehicle} travelled {} km.", round2(*km)),
            Action::Refuel { litres } => format!("{vehicle} refuelled {} L.", round2(*litres)),
            Action::Stunt { stunt, fuel_left } => {
                format!("{stunt}: fuel left {} L.", round2(*fuel_left))
            }
            Action::Setback { km, odometer } => {
                format!("{vehicle} fell back {km} km (km={}).", round2(*odometer))
            }
        }
    }
}
