use serde::Serialize;
use serde_json::{json, Value};

use crate::fuel::round2;
use crate::log::{standings, Standing};
use crate::race::Race;
use crate::vehicle::Vehicle;

/// Final standing of one vehicle.
#[derive(Debug, Clone, Serialize)]
pub struct RaceResult<'a> {
    pub rank: usize,
    #[serde(skip)]
    pub vehicle: &'a Vehicle,
    pub name: String,
    pub distance: f64,
    pub stops: u32,
    pub history: Vec<String>,
}

/// Read-only view deriving rankings and histories from a race.
pub struct ResultsReporter<'a> {
    race: &'a Race,
}

impl<'a> ResultsReporter<'a> {
    pub const fn new(race: &'a Race) -> Self {
        Self { race }
    }

    /// Snapshot of the current order, furthest first.
    pub fn partial_ranking(&self) -> Vec<Standing> {
        standings(&self.race.ranked())
    }

    /// Every vehicle, furthest first, with its stops and history.
    pub fn final_ranking(&self) -> Vec<RaceResult<'a>> {
        self.race
            .ranking()
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let vehicle = &self.race.vehicles()[index];
                let name = vehicle.name();
                RaceResult {
                    rank: position + 1,
                    vehicle,
                    history: self
                        .race
                        .history(index)
                        .iter()
                        .map(|action| action.describe(&name))
                        .collect(),
                    name,
                    distance: round2(vehicle.odometer()),
                    stops: vehicle.stops(),
                }
            })
            .collect()
    }

    /// Each vehicle's actions in chronological order, in ranking order.
    pub fn detailed_history(&self) -> Vec<(String, Vec<String>)> {
        self.final_ranking()
            .into_iter()
            .map(|result| (result.name, result.history))
            .collect()
    }

    /// The whole race as a JSON document.
    pub fn export(&self) -> Value {
        json!({
            "race": self.race.name(),
            "distance": self.race.total_distance(),
            "state": self.race.state(),
            "rounds": self.race.round(),
            "winner": self.race.winner().map(Vehicle::name),
            "vehicles": self.race.vehicles(),
            "results": self.final_ranking(),
            "logs": self.race.logs(),
        })
    }
}
