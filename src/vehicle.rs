use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VehicleError;
use crate::fuel::{round2, Stunt, VehicleKind, TRUCK_CAPACITY_RANGE, TRUCK_LOAD_RANGE};
use crate::registry::{capitalize, NameRegistry};

/// Everything needed to put a vehicle on the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub fuel_capacity: f64,
    pub fuel: f64,
    pub odometer: f64,
    pub kind: VehicleKind,
}

impl VehicleSpec {
    /// Full tank, odometer at 0, no brand or model.
    pub fn full_tank(name: impl Into<String>, fuel_capacity: f64, kind: VehicleKind) -> Self {
        Self {
            name: name.into(),
            brand: String::new(),
            model: String::new(),
            fuel_capacity,
            fuel: fuel_capacity,
            odometer: 0.0,
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    name: String,
    brand: String,
    model: String,
    fuel_capacity: f64,
    fuel: f64,
    odometer: f64,
    stops: u32,
    kind: VehicleKind,
}

impl Vehicle {
    /// Validates `spec` and claims its name in `registry`.
    ///
    /// The name is only claimed once every other check has passed, so a
    /// rejected spec never burns a name.
    pub fn new(spec: VehicleSpec, registry: &mut NameRegistry) -> Result<Self, VehicleError> {
        let fuel_capacity = spec.fuel_capacity.round();
        if !(fuel_capacity >= 1.0) {
            return Err(VehicleError::NoFuelCapacity(spec.fuel_capacity));
        }
        if let VehicleKind::Truck { load_kg } = spec.kind {
            if !TRUCK_CAPACITY_RANGE.contains(&spec.fuel_capacity) {
                return Err(VehicleError::TruckCapacity(spec.fuel_capacity));
            }
            if !TRUCK_LOAD_RANGE.contains(&load_kg) {
                return Err(VehicleError::TruckLoad(load_kg));
            }
        }
        if !(0.0..=fuel_capacity).contains(&spec.fuel) {
            return Err(VehicleError::FuelOutOfRange {
                fuel: spec.fuel,
                capacity: fuel_capacity,
            });
        }
        if !(spec.odometer >= 0.0) {
            return Err(VehicleError::NegativeOdometer(spec.odometer));
        }

        let name = registry.claim(&spec.name)?;

        Ok(Self {
            name,
            brand: spec.brand,
            model: spec.model,
            fuel_capacity,
            fuel: spec.fuel,
            odometer: spec.odometer,
            stops: 0,
            kind: spec.kind,
        })
    }

    /// Normalized name, the vehicle's identity.
    pub fn id(&self) -> &str {
        &self.name
    }

    pub fn name(&self) -> String {
        capitalize(&self.name)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub const fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }

    pub const fn fuel(&self) -> f64 {
        self.fuel
    }

    pub const fn odometer(&self) -> f64 {
        self.odometer
    }

    pub const fn stops(&self) -> u32 {
        self.stops
    }

    /// Kilometres reachable on the fuel left in the tank.
    pub fn range(&self) -> f64 {
        self.fuel * self.kind.km_per_litre() * self.kind.range_factor()
    }

    /// Drives `distance` km, or as far as the tank allows.
    ///
    /// Returns the distance still to cover. Asking for exactly the current
    /// range empties the tank and returns 0.
    pub fn travel(&mut self, distance: f64) -> f64 {
        let range = self.range();
        if distance >= range {
            self.fuel = 0.0;
            self.odometer += range;
            distance - range
        } else {
            self.fuel = (self.fuel - distance / self.kind.km_per_litre()).max(0.0);
            self.odometer += distance;
            0.0
        }
    }

    /// Adds `amount` litres, or fills the tank when `amount` is not positive
    /// or would overflow it. Returns the litres actually added.
    pub fn refuel(&mut self, amount: f64) -> f64 {
        let previous = self.fuel;
        self.stops += 1;
        if amount <= 0.0 || previous + amount >= self.fuel_capacity {
            self.fuel = self.fuel_capacity;
            self.fuel_capacity - previous
        } else {
            self.fuel += amount;
            amount
        }
    }

    pub fn fill_up(&mut self) -> f64 {
        self.refuel(0.0)
    }

    /// Burns the kind's stunt cost, scaled by the current range, and returns
    /// the fuel left. Kinds without a stunt keep their fuel.
    pub fn perform_stunt(&mut self) -> f64 {
        let Some((_, cost)) = self.kind.stunt() else {
            return self.fuel;
        };

        let range = self.range();
        self.fuel = if range > 0.0 {
            (self.fuel - cost / range).max(0.0)
        } else {
            0.0
        };

        self.fuel
    }

    pub fn stunt(&self) -> Option<Stunt> {
        self.kind.stunt().map(|(stunt, _)| stunt)
    }

    /// Pushes the vehicle back `km`, never behind the start line.
    pub fn fall_back(&mut self, km: f64) -> f64 {
        self.odometer = (self.odometer - km).max(0.0);
        self.odometer
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}(km = {}, fuel = {} L)",
            self.name(),
            self.kind.label(),
            round2(self.odometer),
            round2(self.fuel)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuel::{EngineClass, QuadClass};

    fn build(spec: VehicleSpec) -> Vehicle {
        Vehicle::new(spec, &mut NameRegistry::new()).unwrap()
    }

    fn generic(capacity: f64, fuel: f64) -> Vehicle {
        build(VehicleSpec {
            fuel,
            ..VehicleSpec::full_tank("base", capacity, VehicleKind::Generic)
        })
    }

    #[test]
    fn range_of_a_full_generic_tank() {
        let vehicle = generic(50.0, 50.0);
        assert_eq!(vehicle.range(), 500.0);
    }

    #[test]
    fn travelling_exactly_the_range_exhausts_the_tank() {
        let mut vehicle = generic(50.0, 50.0);

        assert_eq!(vehicle.travel(500.0), 0.0);
        assert_eq!(vehicle.fuel(), 0.0);
        assert_eq!(vehicle.odometer(), 500.0);
    }

    #[test]
    fn travelling_past_the_range_returns_the_shortfall() {
        let mut vehicle = generic(50.0, 50.0);

        assert_eq!(vehicle.travel(600.0), 100.0);
        assert_eq!(vehicle.fuel(), 0.0);
        assert_eq!(vehicle.odometer(), 500.0);
    }

    #[test]
    fn short_trips_burn_distance_over_rate() {
        let mut car = build(VehicleSpec::full_tank(
            "hybrid",
            40.0,
            VehicleKind::Car { hybrid: true },
        ));

        assert_eq!(car.travel(50.0), 0.0);
        assert_eq!(car.fuel(), 30.0);
        assert_eq!(car.odometer(), 50.0);

        let mut truck = build(VehicleSpec::full_tank(
            "truck",
            100.0,
            VehicleKind::Truck { load_kg: 5000.0 },
        ));
        assert_eq!(truck.travel(52.5), 0.0);
        assert_eq!(truck.fuel(), 90.0);
    }

    #[test]
    fn motorcycles_burn_at_the_engine_rate() {
        let mut moto = build(VehicleSpec::full_tank(
            "moto",
            20.0,
            VehicleKind::Motorcycle { engine: EngineClass::Cc125 },
        ));
        assert_eq!(moto.range(), 400.0);

        assert_eq!(moto.travel(50.0), 0.0);
        assert_eq!(moto.fuel(), 17.5);
        assert_eq!(moto.odometer(), 50.0);
    }

    #[test]
    fn quad_range_is_halved_but_trips_burn_at_the_engine_rate() {
        let mut quad = build(VehicleSpec::full_tank(
            "quad",
            20.0,
            VehicleKind::Quad {
                engine: EngineClass::Cc500,
                class: QuadClass::LightQuadricycle,
            },
        ));
        assert_eq!(quad.range(), 200.0);

        assert_eq!(quad.travel(50.0), 0.0);
        assert_eq!(quad.fuel(), 17.5);
        assert_eq!(quad.odometer(), 50.0);
        assert_eq!(quad.range(), 175.0);

        // past the halved range the tank runs dry
        assert_eq!(quad.travel(200.0), 25.0);
        assert_eq!(quad.fuel(), 0.0);
        assert_eq!(quad.odometer(), 225.0);
    }

    #[test]
    fn refuel_without_amount_fills_the_tank() {
        let mut vehicle = generic(50.0, 12.5);

        assert_eq!(vehicle.fill_up(), 37.5);
        assert_eq!(vehicle.fuel(), 50.0);
        assert_eq!(vehicle.stops(), 1);
    }

    #[test]
    fn negative_refuel_fills_the_tank() {
        let mut vehicle = generic(50.0, 20.0);

        assert_eq!(vehicle.refuel(-5.0), 30.0);
        assert_eq!(vehicle.fuel(), 50.0);
        assert_eq!(vehicle.stops(), 1);
    }

    #[test]
    fn partial_refuel_adds_the_amount() {
        let mut vehicle = generic(50.0, 10.0);

        assert_eq!(vehicle.refuel(15.0), 15.0);
        assert_eq!(vehicle.fuel(), 25.0);
        assert_eq!(vehicle.refuel(100.0), 25.0);
        assert_eq!(vehicle.fuel(), 50.0);
        assert_eq!(vehicle.stops(), 2);
    }

    #[test]
    fn stunt_cost_is_scaled_by_range() {
        let mut car = build(VehicleSpec::full_tank(
            "skidder",
            50.0,
            VehicleKind::Car { hybrid: false },
        ));

        // 7.5 / 500 km of range
        assert_eq!(car.perform_stunt(), 50.0 - 0.015);
    }

    #[test]
    fn stunt_on_a_dry_tank_stays_at_zero() {
        let mut moto = build(VehicleSpec {
            fuel: 0.0,
            ..VehicleSpec::full_tank(
                "moto",
                20.0,
                VehicleKind::Motorcycle { engine: EngineClass::Cc250 },
            )
        });

        assert_eq!(moto.perform_stunt(), 0.0);

        let mut nearly_dry = build(VehicleSpec {
            fuel: 0.5,
            ..VehicleSpec::full_tank(
                "nearly dry",
                20.0,
                VehicleKind::Motorcycle { engine: EngineClass::Cc250 },
            )
        });
        // 6.5 / 10 km of range overdraws the tank
        assert_eq!(nearly_dry.perform_stunt(), 0.0);
    }

    #[test]
    fn generic_vehicles_do_no_stunts() {
        let mut vehicle = generic(50.0, 20.0);
        assert_eq!(vehicle.stunt(), None);
        assert_eq!(vehicle.perform_stunt(), 20.0);
    }

    #[test]
    fn fall_back_clamps_at_the_start_line() {
        let mut vehicle = generic(50.0, 50.0);
        vehicle.travel(30.0);

        assert_eq!(vehicle.fall_back(10.0), 20.0);
        assert_eq!(vehicle.fall_back(45.0), 0.0);
    }

    #[test]
    fn capacity_is_rounded_at_construction() {
        let vehicle = generic(49.6, 10.0);
        assert_eq!(vehicle.fuel_capacity(), 50.0);
    }

    #[test]
    fn rejects_out_of_range_specs() {
        let mut registry = NameRegistry::new();

        let truck = |capacity: f64, load_kg: f64| {
            VehicleSpec::full_tank("truck", capacity, VehicleKind::Truck { load_kg })
        };
        assert_eq!(
            Vehicle::new(truck(80.0, 2000.0), &mut registry).unwrap_err(),
            VehicleError::TruckCapacity(80.0)
        );
        assert_eq!(
            Vehicle::new(truck(100.0, 12000.0), &mut registry).unwrap_err(),
            VehicleError::TruckLoad(12000.0)
        );

        let overfull = VehicleSpec {
            fuel: 60.0,
            ..VehicleSpec::full_tank("overfull", 50.0, VehicleKind::Generic)
        };
        assert!(matches!(
            Vehicle::new(overfull, &mut registry),
            Err(VehicleError::FuelOutOfRange { .. })
        ));

        let empty_tank = VehicleSpec::full_tank("dry", 0.2, VehicleKind::Generic);
        assert_eq!(
            Vehicle::new(empty_tank, &mut registry).unwrap_err(),
            VehicleError::NoFuelCapacity(0.2)
        );

        // rejected specs keep their names free
        assert!(registry.is_empty());
    }

    #[test]
    fn display_uses_capitalized_name() {
        let vehicle = generic(50.0, 12.346);
        assert_eq!(vehicle.to_string(), "Base Vehicle(km = 0, fuel = 12.35 L)");
    }
}
