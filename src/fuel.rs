//! Fuel model: how far each kind of vehicle goes per litre and what its
//! stunt costs.

use std::fmt;

use serde::{Deserialize, Serialize};

const KM_PER_LITRE: f64 = 10.0;
const KM_PER_LITRE_HYBRID: f64 = 5.0;
const KM_PER_LITRE_MOTO: f64 = 20.0;
const KM_PER_LITRE_TRUCK: f64 = 6.25;
const QUAD_RANGE_FACTOR: f64 = 0.5;

const TRUCK_LOAD_STEP_KG: f64 = 1000.0;
const TRUCK_LOAD_PENALTY: f64 = 0.2;

const SKID_COST: f64 = 7.5;
const SKID_COST_HYBRID: f64 = 6.25;
const WHEELIE_COST: f64 = 6.5;

pub const TRUCK_CAPACITY_RANGE: std::ops::RangeInclusive<f64> = 90.0..=150.0;
pub const TRUCK_LOAD_RANGE: std::ops::RangeInclusive<f64> = 1000.0..=10000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineClass {
    Cc125,
    Cc250,
    Cc400,
    Cc500,
    Cc750,
    Cc900,
    Cc1000,
}

impl EngineClass {
    pub const ALL: [Self; 7] = [
        Self::Cc125,
        Self::Cc250,
        Self::Cc400,
        Self::Cc500,
        Self::Cc750,
        Self::Cc900,
        Self::Cc1000,
    ];

    pub const fn cc(self) -> u32 {
        match self {
            Self::Cc125 => 125,
            Self::Cc250 => 250,
            Self::Cc400 => 400,
            Self::Cc500 => 500,
            Self::Cc750 => 750,
            Self::Cc900 => 900,
            Self::Cc1000 => 1000,
        }
    }

    /// Kilometres per litre for this displacement.
    ///
    /// The displacement term is an integer division, so it only ever
    /// subtracts whole kilometres.
    pub fn km_per_litre(self) -> f64 {
        KM_PER_LITRE_MOTO - f64::from((1000 - self.cc()) / 1000)
    }
}

/// Homologation class of a quad. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuadClass {
    LightQuadricycle,
    HeavyQuadricycle,
    SpecialVehicle,
}

impl QuadClass {
    pub const ALL: [Self; 3] = [
        Self::LightQuadricycle,
        Self::HeavyQuadricycle,
        Self::SpecialVehicle,
    ];
}

impl fmt::Display for QuadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LightQuadricycle => write!(f, "light quadricycle"),
            Self::HeavyQuadricycle => write!(f, "heavy quadricycle"),
            Self::SpecialVehicle => write!(f, "special vehicle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stunt {
    Skid,
    Wheelie,
}

impl fmt::Display for Stunt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skid => write!(f, "Skid"),
            Self::Wheelie => write!(f, "Wheelie"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleKind {
    Generic,
    Car { hybrid: bool },
    Motorcycle { engine: EngineClass },
    Truck { load_kg: f64 },
    Quad { engine: EngineClass, class: QuadClass },
}

impl VehicleKind {
    /// Kilometres covered per litre on a trip.
    pub fn km_per_litre(&self) -> f64 {
        match *self {
            Self::Generic | Self::Car { hybrid: false } => KM_PER_LITRE,
            Self::Car { hybrid: true } => KM_PER_LITRE_HYBRID,
            Self::Motorcycle { engine } | Self::Quad { engine, .. } => engine.km_per_litre(),
            Self::Truck { load_kg } => KM_PER_LITRE_TRUCK - weight_penalty(load_kg),
        }
    }

    /// Share of `fuel * km_per_litre` the tank is good for. Quads only get
    /// half of it.
    pub const fn range_factor(&self) -> f64 {
        match self {
            Self::Quad { .. } => QUAD_RANGE_FACTOR,
            _ => 1.0,
        }
    }

    /// The stunt this kind performs and its fixed fuel cost.
    pub fn stunt(&self) -> Option<(Stunt, f64)> {
        match *self {
            Self::Generic => None,
            Self::Car { hybrid: false } | Self::Truck { .. } => Some((Stunt::Skid, SKID_COST)),
            Self::Car { hybrid: true } => Some((Stunt::Skid, SKID_COST_HYBRID)),
            Self::Motorcycle { .. } | Self::Quad { .. } => Some((Stunt::Wheelie, WHEELIE_COST)),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Generic => "Vehicle",
            Self::Car { .. } => "Car",
            Self::Motorcycle { .. } => "Motorcycle",
            Self::Truck { .. } => "Truck",
            Self::Quad { .. } => "Quad",
        }
    }
}

/// Whole kilometres per litre a truck loses to its load.
pub fn weight_penalty(load_kg: f64) -> f64 {
    ((load_kg / TRUCK_LOAD_STEP_KG) * TRUCK_LOAD_PENALTY).floor()
}

/// Rounds to two decimals, the precision every report uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
