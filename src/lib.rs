#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]
//! Fuel-limited multi-vehicle race simulation.
//!
//! Vehicles of different kinds burn fuel at different rates, refuel when
//! they run dry and lose ground to stunts. A [`Race`] moves one random
//! vehicle per round until somebody reaches the finish line;
//! [`ResultsReporter`] turns the finished race into rankings and histories.

pub mod action;
pub mod config;
pub mod error;
pub mod factory;
pub mod fuel;
pub mod log;
pub mod race;
pub mod registry;
pub mod report;
pub mod rng;
pub mod vehicle;

pub use action::Action;
pub use config::RaceConfig;
pub use error::{RaceError, VehicleError};
pub use factory::VehicleFactory;
pub use fuel::{EngineClass, QuadClass, Stunt, VehicleKind};
pub use race::{Race, State};
pub use registry::NameRegistry;
pub use report::{RaceResult, ResultsReporter};
pub use rng::{RandomSource, SimRng};
pub use vehicle::{Vehicle, VehicleSpec};
