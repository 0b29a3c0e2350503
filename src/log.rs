use serde::{Deserialize, Serialize};

use crate::fuel::round2;
use crate::vehicle::Vehicle;

/// A vehicle's place in a ranking snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub position: usize,
    pub name: String,
    pub odometer: f64,
    pub fuel: f64,
}

/// What happened in one round: who moved, how far they were sent, and the
/// partial ranking afterwards.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct RoundLog {
    pub round: u64,
    pub current_vehicle: usize,
    pub leg_km: f64,
    pub standings: Vec<Standing>,
}

impl RoundLog {
    pub fn add_info(&mut self, current_vehicle: usize, leg_km: f64, vehicles: &[&Vehicle]) {
        self.current_vehicle = current_vehicle;
        self.leg_km = leg_km;
        self.standings = standings(vehicles);
    }
}

/// Numbers already-ranked vehicles from 1, rounding for display.
pub fn standings(ranked: &[&Vehicle]) -> Vec<Standing> {
    ranked
        .iter()
        .enumerate()
        .map(|(index, vehicle)| Standing {
            position: index + 1,
            name: vehicle.name(),
            odometer: round2(vehicle.odometer()),
            fuel: round2(vehicle.fuel()),
        })
        .collect()
}
