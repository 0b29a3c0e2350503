use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::action::Action;
use crate::error::RaceError;
use crate::fuel::round2;
use crate::log::RoundLog;
use crate::rng::RandomSource;
use crate::vehicle::Vehicle;

pub const MIN_DISTANCE_KM: f64 = 1000.0;
const CHUNK_KM: f64 = 20.0;

// Leg lengths are drawn in hundredths of a kilometre.
pub(crate) const LEG_CENTIKM: RangeInclusive<u32> = 1000..=20000;
pub(crate) const STUNTS_PER_LEG: RangeInclusive<u32> = 0..=3;
pub(crate) const SETBACK_KM: RangeInclusive<u32> = 10..=50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    NotStarted,
    Running,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Race {
    name: String,
    total_distance: f64,
    state: State,
    round: u64,
    vehicles: Vec<Vehicle>,
    history: Vec<Vec<Action>>,
    logs: Vec<RoundLog>,
    winner: Option<usize>,
}

impl Race {
    pub fn new(
        name: impl Into<String>,
        total_distance: f64,
        vehicles: Vec<Vehicle>,
    ) -> Result<Self, RaceError> {
        if !(total_distance >= MIN_DISTANCE_KM) {
            return Err(RaceError::DistanceTooShort {
                min: MIN_DISTANCE_KM,
                got: total_distance,
            });
        }
        if vehicles.is_empty() {
            return Err(RaceError::NoParticipants);
        }
        let mut seen = HashSet::with_capacity(vehicles.len());
        if let Some(duplicate) = vehicles.iter().find(|vehicle| !seen.insert(vehicle.id())) {
            return Err(RaceError::DuplicateParticipant(duplicate.name()));
        }

        Ok(Self {
            name: name.into(),
            total_distance,
            state: State::NotStarted,
            round: 0,
            history: vec![Vec::new(); vehicles.len()],
            vehicles,
            logs: Vec::new(),
            winner: None,
        })
    }

    /// Runs rounds until a vehicle crosses the line or the race is stopped.
    pub fn start(&mut self, rng: &mut impl RandomSource) -> Result<(), RaceError> {
        self.begin()?;
        while self.state == State::Running {
            self.play_round(rng);
        }

        Ok(())
    }

    /// Moves the race to `Running` without playing any round, for callers
    /// driving it with [`Race::step`].
    pub fn begin(&mut self) -> Result<(), RaceError> {
        if self.state != State::NotStarted {
            return Err(RaceError::AlreadyStarted(self.name.clone()));
        }

        self.state = State::Running;
        info!(
            race = %self.name,
            distance = self.total_distance,
            participants = self.vehicles.len(),
            "race started"
        );
        Ok(())
    }

    /// Plays a single round if the race is running.
    pub fn step(&mut self, rng: &mut impl RandomSource) -> State {
        if self.state == State::Running {
            self.play_round(rng);
        }
        self.state
    }

    /// Ends a running race without a winner. Takes effect before the next
    /// round.
    pub fn stop(&mut self) {
        if self.state == State::Running {
            self.state = State::Finished;
            info!(race = %self.name, round = self.round, "race stopped");
        }
    }

    fn play_round(&mut self, rng: &mut impl RandomSource) {
        self.round += 1;

        let index = rng.pick(self.vehicles.len());
        let leg = self.random_leg(index, rng);
        self.advance_vehicle(index, leg, rng);

        self.log_round(index, leg);
        self.determine_winner();
    }

    /// Draws a leg and trims it so the vehicle stops at the finish line.
    fn random_leg(&self, index: usize, rng: &mut impl RandomSource) -> f64 {
        let leg = f64::from(rng.roll(LEG_CENTIKM)) / 100.0;
        let odometer = self.vehicles[index].odometer();

        let leg = if odometer + leg > self.total_distance {
            self.total_distance - odometer
        } else {
            leg
        };
        round2(leg.max(0.0))
    }

    fn advance_vehicle(&mut self, index: usize, leg: f64, rng: &mut impl RandomSource) {
        let stunts = rng.roll(STUNTS_PER_LEG);

        let mut covered = 0.0;
        while covered + CHUNK_KM <= leg {
            self.advance_chunk(index, CHUNK_KM);
            for _ in 0..stunts {
                self.perform_stunt(index, rng);
            }
            covered += CHUNK_KM;
        }
        self.advance_chunk(index, leg - covered);
    }

    /// Covers `distance`, stopping to refuel as often as needed.
    fn advance_chunk(&mut self, index: usize, distance: f64) {
        let mut shortfall = round2(self.vehicles[index].travel(distance));
        self.record(index, Action::Travel { km: distance - shortfall });

        while shortfall > 0.0 {
            self.refuel_vehicle(index);

            let remaining = shortfall;
            shortfall = round2(self.vehicles[index].travel(remaining));
            self.record(index, Action::Travel { km: remaining - shortfall });
        }
    }

    fn refuel_vehicle(&mut self, index: usize) {
        let litres = round2(self.vehicles[index].fill_up());
        self.record(index, Action::Refuel { litres });
    }

    fn perform_stunt(&mut self, index: usize, rng: &mut impl RandomSource) {
        let Some(stunt) = self.vehicles[index].stunt() else {
            return;
        };
        let setback = f64::from(rng.roll(SETBACK_KM));

        let vehicle = &mut self.vehicles[index];
        let fuel_left = vehicle.perform_stunt();
        let odometer = vehicle.fall_back(setback);

        self.record(index, Action::Stunt { stunt, fuel_left });
        self.record(index, Action::Setback { km: setback, odometer });
    }

    fn record(&mut self, index: usize, action: Action) {
        trace!(
            race = %self.name,
            round = self.round,
            vehicle = self.vehicles[index].id(),
            ?action,
            "action recorded"
        );
        self.history[index].push(action);
    }

    fn log_round(&mut self, index: usize, leg: f64) {
        let mut log = RoundLog {
            round: self.round,
            ..RoundLog::default()
        };
        log.add_info(index, leg, &self.ranked());

        debug!(
            race = %self.name,
            round = self.round,
            vehicle = self.vehicles[index].id(),
            leg,
            leader = log.standings.first().map(|s| s.name.as_str()).unwrap_or_default(),
            "round played"
        );
        self.logs.push(log);
    }

    /// The first vehicle in registration order at or past the line wins.
    /// Odometers are compared at reporting precision.
    fn determine_winner(&mut self) {
        let total = self.total_distance;
        let Some(index) = self
            .vehicles
            .iter()
            .position(|vehicle| round2(vehicle.odometer()) >= total)
        else {
            return;
        };

        self.state = State::Finished;
        self.winner = Some(index);
        info!(
            race = %self.name,
            winner = self.vehicles[index].id(),
            rounds = self.round,
            "race finished"
        );
    }

    /// Registration indices ordered by odometer, furthest first. Ties keep
    /// registration order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.vehicles.len()).collect();
        order.sort_by(|&a, &b| {
            self.vehicles[b]
                .odometer()
                .total_cmp(&self.vehicles[a].odometer())
        });
        order
    }

    pub fn ranked(&self) -> Vec<&Vehicle> {
        self.ranking()
            .into_iter()
            .map(|index| &self.vehicles[index])
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub const fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub const fn round(&self) -> u64 {
        self.round
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn history(&self, index: usize) -> &[Action] {
        &self.history[index]
    }

    pub fn logs(&self) -> &[RoundLog] {
        &self.logs
    }

    pub fn winner(&self) -> Option<&Vehicle> {
        self.winner.map(|index| &self.vehicles[index])
    }
}
