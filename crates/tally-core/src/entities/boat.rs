use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Vehicle;
use crate::enums::{Movement, VehicleEvent};
use crate::traits::{Describe, Movable};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Boat {
    vehicle: Vehicle,
    boat_type: String,
}

impl Boat {
    pub fn new(vehicle: Vehicle, boat_type: impl Into<String>) -> Self {
        Self {
            vehicle,
            boat_type: boat_type.into(),
        }
    }

    #[must_use]
    pub fn boat_type(&self) -> &str {
        &self.boat_type
    }

    /// Drop anchor. Speed is left alone.
    pub fn anchor(&self) -> VehicleEvent {
        tracing::debug!(name = %self.vehicle.name(), "anchor");
        VehicleEvent::Anchored
    }
}

impl Describe for Boat {
    fn describe(&self) -> String {
        format!(
            "Boat: {} - Type: {}",
            self.vehicle.describe(),
            self.boat_type
        )
    }
}

impl Movable for Boat {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    fn movement(&self) -> Movement {
        Movement::Sailing {
            speed: self.vehicle.current_speed(),
        }
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sails_and_anchors() {
        let mut yacht = Boat::new(Vehicle::new("Sea Breeze", 35).unwrap(), "Sailing Yacht");
        let _ = yacht.accelerate(30);
        assert_eq!(yacht.movement(), Movement::Sailing { speed: 30 });
        assert_eq!(yacht.anchor(), VehicleEvent::Anchored);
        assert_eq!(yacht.vehicle().current_speed(), 30);
        assert_eq!(
            yacht.describe(),
            "Boat: Sea Breeze, max speed 35 - Type: Sailing Yacht"
        );
    }
}
