use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Vehicle;
use crate::enums::{Movement, VehicleEvent};
use crate::traits::{Describe, Movable};

const CAR_WHEELS: u8 = 4;

/// A road car.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Car {
    vehicle: Vehicle,
    fuel_type: String,
    wheels: u8,
}

impl Car {
    pub fn new(vehicle: Vehicle, fuel_type: impl Into<String>) -> Self {
        Self {
            vehicle,
            fuel_type: fuel_type.into(),
            wheels: CAR_WHEELS,
        }
    }

    #[must_use]
    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    #[must_use]
    pub const fn wheels(&self) -> u8 {
        self.wheels
    }

    pub fn honk(&self) -> VehicleEvent {
        tracing::debug!(name = %self.vehicle.name(), "honk");
        VehicleEvent::Honked
    }
}

impl Describe for Car {
    fn describe(&self) -> String {
        format!(
            "Car: {} - Fuel: {}, {} wheels",
            self.vehicle.describe(),
            self.fuel_type,
            self.wheels
        )
    }
}

impl Movable for Car {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    fn movement(&self) -> Movement {
        Movement::Driving {
            speed: self.vehicle.current_speed(),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn camry() -> Car {
        Car::new(Vehicle::new("Toyota Camry", 120).unwrap(), "Hybrid")
    }

    #[test]
    fn cars_have_four_wheels() {
        assert_eq!(camry().wheels(), 4);
    }

    #[test]
    fn drives_at_current_speed() {
        let mut car = camry();
        let _ = car.accelerate(30);
        assert_eq!(car.movement(), Movement::Driving { speed: 30 });
        assert_eq!(car.honk(), VehicleEvent::Honked);
    }

    #[test]
    fn describe_embeds_vehicle_summary() {
        let car = camry();
        assert_eq!(
            car.describe(),
            "Car: Toyota Camry, max speed 120 - Fuel: Hybrid, 4 wheels"
        );
        assert!(car.describe().contains(&car.vehicle().describe()));
    }
}
