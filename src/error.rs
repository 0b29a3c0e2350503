use thiserror::Error;

/// Rejections raised while building a vehicle.
#[derive(Debug, Error, PartialEq)]
pub enum VehicleError {
    #[error("vehicle name cannot be empty")]
    EmptyName,

    #[error("a vehicle named `{0}` is already registered")]
    DuplicateName(String),

    #[error("fuel capacity must be at least 1 L, got {0}")]
    NoFuelCapacity(f64),

    #[error("fuel level {fuel} L is outside 0..={capacity} L")]
    FuelOutOfRange { fuel: f64, capacity: f64 },

    #[error("odometer cannot start negative, got {0} km")]
    NegativeOdometer(f64),

    #[error("truck fuel capacity must be between 90 and 150 L, got {0}")]
    TruckCapacity(f64),

    #[error("truck load must be between 1000 and 10000 kg, got {0}")]
    TruckLoad(f64),
}

/// Rejections raised while building or driving a race.
#[derive(Debug, Error, PartialEq)]
pub enum RaceError {
    #[error("race distance must be at least {min} km, got {got}")]
    DistanceTooShort { min: f64, got: f64 },

    #[error("a race needs at least one participant")]
    NoParticipants,

    #[error("`{0}` is entered more than once")]
    DuplicateParticipant(String),

    #[error("race `{0}` has already started")]
    AlreadyStarted(String),
}
