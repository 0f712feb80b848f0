use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::counter::BoundedCounter;
use crate::entities::Vehicle;
use crate::enums::Movement;
use crate::errors::CoreError;
use crate::outcome::{Advance, Rejection};
use crate::traits::{Describe, Movable};

/// Speed needed to leave the ground and the altitude reached on takeoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FlightRules {
    pub takeoff_speed: u32,
    pub takeoff_altitude: u32,
}

impl Default for FlightRules {
    fn default() -> Self {
        Self {
            takeoff_speed: 160,
            takeoff_altitude: 1000,
        }
    }
}

/// A plane: a vehicle with a second bounded counter for altitude.
///
/// ```text
/// grounded (altitude 0) ── take_off, speed >= takeoff_speed ──► airborne (takeoff_altitude)
/// airborne ── climb(d) ──► min(altitude + d, max_altitude)
/// ```
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Plane {
    vehicle: Vehicle,
    altitude: BoundedCounter,
    rules: FlightRules,
}

impl Plane {
    pub fn new(vehicle: Vehicle, max_altitude: u32) -> Result<Self, CoreError> {
        Self::with_rules(vehicle, max_altitude, FlightRules::default())
    }

    /// A plane with custom takeoff rules. The ceiling must leave room for takeoff.
    pub fn with_rules(
        vehicle: Vehicle,
        max_altitude: u32,
        rules: FlightRules,
    ) -> Result<Self, CoreError> {
        check_ceiling(vehicle.name(), max_altitude, rules)?;
        Ok(Self {
            vehicle,
            altitude: BoundedCounter::new(max_altitude),
            rules,
        })
    }

    #[must_use]
    pub const fn max_altitude(&self) -> u32 {
        self.altitude.max()
    }

    #[must_use]
    pub const fn current_altitude(&self) -> u32 {
        self.altitude.value()
    }

    #[must_use]
    pub const fn rules(&self) -> FlightRules {
        self.rules
    }

    #[must_use]
    pub const fn is_airborne(&self) -> bool {
        !self.altitude.is_zero()
    }

    /// Leave the ground, or return to the takeoff altitude if already flying.
    /// Returns the altitude reached.
    pub fn take_off(&mut self) -> Result<u32, Rejection> {
        let speed = self.vehicle.current_speed();
        if speed < self.rules.takeoff_speed {
            tracing::debug!(name = %self.vehicle.name(), speed, "takeoff rejected");
            return Err(Rejection::InsufficientSpeed {
                speed,
                required: self.rules.takeoff_speed,
            });
        }
        let altitude = self.altitude.set_clamped(self.rules.takeoff_altitude);
        tracing::debug!(name = %self.vehicle.name(), altitude, "take off");
        Ok(altitude)
    }

    /// Gain `increase` feet, saturating at the ceiling. Grounded planes cannot climb.
    pub fn climb(&mut self, increase: i64) -> Advance {
        if !self.is_airborne() {
            return Advance::rejected(Rejection::NotAirborne);
        }
        let outcome = self.altitude.advance(increase);
        tracing::debug!(name = %self.vehicle.name(), requested = increase, ?outcome, "climb");
        outcome
    }
}

impl Describe for Plane {
    fn describe(&self) -> String {
        format!(
            "Plane: {} - Ceiling: {} feet",
            self.vehicle.describe(),
            self.max_altitude()
        )
    }
}

impl Movable for Plane {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    fn movement(&self) -> Movement {
        let speed = self.vehicle.current_speed();
        if self.is_airborne() {
            Movement::Flying {
                speed,
                altitude: self.altitude.value(),
            }
        } else {
            Movement::Taxiing { speed }
        }
    }
}

fn check_ceiling(name: &str, max_altitude: u32, rules: FlightRules) -> Result<(), CoreError> {
    if rules.takeoff_altitude == 0 {
        return Err(CoreError::Validation(format!(
            "plane '{name}' takeoff altitude must be positive"
        )));
    }
    if max_altitude < rules.takeoff_altitude {
        return Err(CoreError::Validation(format!(
            "plane '{name}' max altitude {max_altitude} is below takeoff altitude {}",
            rules.takeoff_altitude
        )));
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawPlane {
    vehicle: Vehicle,
    altitude: BoundedCounter,
    rules: FlightRules,
}

impl<'de> Deserialize<'de> for Plane {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawPlane::deserialize(deserializer)?;
        check_ceiling(raw.vehicle.name(), raw.altitude.max(), raw.rules)
            .map_err(serde::de::Error::custom)?;
        Ok(Self {
            vehicle: raw.vehicle,
            altitude: raw.altitude,
            rules: raw.rules,
        })
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn boeing() -> Plane {
        Plane::new(Vehicle::new("Boeing 737", 550).unwrap(), 41_000).unwrap()
    }

    #[test]
    fn ceiling_below_takeoff_altitude_is_rejected() {
        let vehicle = Vehicle::new("Glider", 100).unwrap();
        assert!(matches!(
            Plane::new(vehicle, 999),
            Err(CoreError::Validation(_))
        ));
    }

    #[rstest]
    #[case(1)]
    #[case(10_000)]
    #[case(0)]
    #[case(-5)]
    fn climb_before_takeoff_is_rejected(#[case] increase: i64) {
        let mut plane = boeing();
        assert_eq!(
            plane.climb(increase),
            Advance::Rejected {
                reason: Rejection::NotAirborne
            }
        );
        assert_eq!(plane.current_altitude(), 0);
    }

    #[rstest]
    #[case(159, false)]
    #[case(160, true)]
    #[case(300, true)]
    fn takeoff_depends_on_speed(#[case] speed: i64, #[case] succeeds: bool) {
        let mut plane = boeing();
        let _ = plane.accelerate(speed);
        let result = plane.take_off();
        assert_eq!(result.is_ok(), succeeds);
        let expected = if succeeds { 1000 } else { 0 };
        assert_eq!(plane.current_altitude(), expected);
    }

    #[test]
    fn takeoff_then_climb_to_ceiling() {
        let mut plane = boeing();
        let _ = plane.accelerate(150);
        assert_eq!(
            plane.take_off(),
            Err(Rejection::InsufficientSpeed {
                speed: 150,
                required: 160
            })
        );
        assert_eq!(plane.movement(), Movement::Taxiing { speed: 150 });

        let _ = plane.accelerate(150);
        assert_eq!(plane.take_off(), Ok(1000));
        assert_eq!(
            plane.climb(10_000),
            Advance::Advanced {
                from: 1000,
                to: 11_000
            }
        );
        assert_eq!(
            plane.climb(50_000),
            Advance::Clamped {
                from: 11_000,
                to: 41_000
            }
        );
        assert_eq!(
            plane.movement(),
            Movement::Flying {
                speed: 300,
                altitude: 41_000
            }
        );
    }

    #[test]
    fn second_takeoff_returns_to_takeoff_altitude() {
        let mut plane = boeing();
        let _ = plane.accelerate(200);
        assert_eq!(plane.take_off(), Ok(1000));
        assert_eq!(plane.take_off(), Ok(1000));
        let _ = plane.climb(500);
        assert_eq!(plane.current_altitude(), 1500);
        assert_eq!(plane.take_off(), Ok(1000));
        assert_eq!(plane.current_altitude(), 1000);
    }

    #[test]
    fn takeoff_while_flying_still_needs_speed() {
        let mut plane = boeing();
        let _ = plane.accelerate(200);
        plane.take_off().unwrap();
        let _ = plane.climb(500);
        let _ = plane.stop();
        assert_eq!(
            plane.take_off(),
            Err(Rejection::InsufficientSpeed {
                speed: 0,
                required: 160
            })
        );
        assert_eq!(plane.current_altitude(), 1500);
    }

    #[test]
    fn zero_takeoff_altitude_is_rejected() {
        let rules = FlightRules {
            takeoff_speed: 160,
            takeoff_altitude: 0,
        };
        let vehicle = Vehicle::new("Boeing 737", 550).unwrap();
        assert!(matches!(
            Plane::with_rules(vehicle, 41_000, rules),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn custom_rules_change_the_threshold() {
        let rules = FlightRules {
            takeoff_speed: 80,
            takeoff_altitude: 300,
        };
        let mut plane =
            Plane::with_rules(Vehicle::new("Cessna 172", 140).unwrap(), 14_000, rules).unwrap();
        let _ = plane.accelerate(90);
        assert_eq!(plane.take_off(), Ok(300));
    }

    #[test]
    fn stopping_keeps_altitude() {
        let mut plane = boeing();
        let _ = plane.accelerate(200);
        plane.take_off().unwrap();
        let _ = plane.stop();
        assert_eq!(plane.vehicle().current_speed(), 0);
        assert_eq!(plane.current_altitude(), 1000);
    }
}
