//! Random roster generation: every participant name gets a random kind of
//! vehicle with plausible specs.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::VehicleError;
use crate::fuel::{EngineClass, QuadClass, VehicleKind};
use crate::registry::NameRegistry;
use crate::rng::RandomSource;
use crate::vehicle::{Vehicle, VehicleSpec};

const CAR_MODELS: [(&str, &str); 5] = [
    ("Ford", "Focus"),
    ("Renault", "Megane"),
    ("Audi", "A4"),
    ("Mercedes", "CLA"),
    ("Volvo", "V40"),
];

const MOTORCYCLE_MODELS: [(&str, &str); 5] = [
    ("Derbi", "Variant"),
    ("Yamaha", "Tmax"),
    ("Kymco", "Superdink"),
    ("Honda", "CBR"),
    ("Suzuki", "GSX"),
];

const CAR_CAPACITY: RangeInclusive<u32> = 30..=60;
const TWO_WHEEL_CAPACITY: RangeInclusive<u32> = 15..=30;
const TRUCK_CAPACITY: RangeInclusive<u32> = 90..=150;
const TRUCK_LOAD_KG: RangeInclusive<u32> = 1000..=10000;
// Starting fuel, in tenths of the tank.
const STARTING_FUEL_TENTHS: RangeInclusive<u32> = 2..=10;

/// Builds vehicles against a name registry.
pub struct VehicleFactory<'r> {
    registry: &'r mut NameRegistry,
}

impl<'r> VehicleFactory<'r> {
    pub fn new(registry: &'r mut NameRegistry) -> Self {
        Self { registry }
    }

    /// Validates and registers an explicit spec.
    pub fn build(&mut self, spec: VehicleSpec) -> Result<Vehicle, VehicleError> {
        Vehicle::new(spec, self.registry)
    }

    /// Draws a random vehicle for `name`.
    pub fn random(
        &mut self,
        name: &str,
        rng: &mut impl RandomSource,
    ) -> Result<Vehicle, VehicleError> {
        let spec = random_spec(name, rng);
        debug!(name, kind = spec.kind.label(), capacity = spec.fuel_capacity, "vehicle drawn");
        self.build(spec)
    }

    /// One random vehicle per name, in order. Stops at the first rejection.
    pub fn roster<S: AsRef<str>>(
        &mut self,
        names: &[S],
        rng: &mut impl RandomSource,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        names
            .iter()
            .map(|name| self.random(name.as_ref(), rng))
            .collect()
    }
}

fn random_spec(name: &str, rng: &mut impl RandomSource) -> VehicleSpec {
    let (brand, model, capacity, kind) = match rng.pick(4) {
        0 => {
            let (brand, model) = CAR_MODELS[rng.pick(CAR_MODELS.len())];
            let kind = VehicleKind::Car {
                hybrid: rng.pick(2) == 1,
            };
            (brand, model, rng.roll(CAR_CAPACITY), kind)
        }
        1 => {
            let (brand, model) = MOTORCYCLE_MODELS[rng.pick(MOTORCYCLE_MODELS.len())];
            let kind = VehicleKind::Motorcycle {
                engine: random_engine(rng),
            };
            (brand, model, rng.roll(TWO_WHEEL_CAPACITY), kind)
        }
        2 => {
            let capacity = rng.roll(TRUCK_CAPACITY);
            let kind = VehicleKind::Truck {
                load_kg: f64::from(rng.roll(TRUCK_LOAD_KG)),
            };
            ("", "", capacity, kind)
        }
        _ => {
            let capacity = rng.roll(TWO_WHEEL_CAPACITY);
            let kind = VehicleKind::Quad {
                engine: random_engine(rng),
                class: QuadClass::ALL[rng.pick(QuadClass::ALL.len())],
            };
            ("", "", capacity, kind)
        }
    };

    let fuel_capacity = f64::from(capacity);
    let fuel = fuel_capacity * f64::from(rng.roll(STARTING_FUEL_TENTHS)) / 10.0;

    VehicleSpec {
        name: name.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        fuel_capacity,
        fuel: fuel.min(fuel_capacity),
        odometer: 0.0,
        kind,
    }
}

fn random_engine(rng: &mut impl RandomSource) -> EngineClass {
    EngineClass::ALL[rng.pick(EngineClass::ALL.len())]
}
