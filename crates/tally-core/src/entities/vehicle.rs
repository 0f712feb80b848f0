use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::counter::BoundedCounter;
use crate::enums::{Movement, VehicleEvent};
use crate::errors::CoreError;
use crate::outcome::Advance;
use crate::traits::{Describe, Movable};

/// A named vehicle with a speed bounded by its top speed.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Vehicle {
    name: String,
    speed: BoundedCounter,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, max_speed: u32) -> Result<Self, CoreError> {
        let name = name.into();
        check_max_speed(&name, max_speed)?;
        Ok(Self {
            name,
            speed: BoundedCounter::new(max_speed),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn max_speed(&self) -> u32 {
        self.speed.max()
    }

    #[must_use]
    pub const fn current_speed(&self) -> u32 {
        self.speed.value()
    }

    pub fn start(&self) -> VehicleEvent {
        tracing::debug!(name = %self.name, "start");
        VehicleEvent::Started
    }

    /// Bring the vehicle to a standstill.
    pub fn stop(&mut self) -> VehicleEvent {
        self.speed.reset();
        tracing::debug!(name = %self.name, "stop");
        VehicleEvent::Stopped
    }

    /// Speed up by `increase`, saturating at the top speed.
    pub fn accelerate(&mut self, increase: i64) -> Advance {
        let outcome = self.speed.advance(increase);
        tracing::debug!(name = %self.name, requested = increase, ?outcome, "accelerate");
        outcome
    }
}

impl Describe for Vehicle {
    fn describe(&self) -> String {
        format!("{}, max speed {}", self.name, self.max_speed())
    }
}

impl Movable for Vehicle {
    fn vehicle(&self) -> &Vehicle {
        self
    }

    fn vehicle_mut(&mut self) -> &mut Vehicle {
        self
    }

    fn movement(&self) -> Movement {
        Movement::Moving {
            speed: self.current_speed(),
        }
    }
}

fn check_max_speed(name: &str, max_speed: u32) -> Result<(), CoreError> {
    if max_speed == 0 {
        return Err(CoreError::Validation(format!(
            "vehicle '{name}' must have a positive max speed"
        )));
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawVehicle {
    name: String,
    speed: BoundedCounter,
}

impl<'de> Deserialize<'de> for Vehicle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawVehicle::deserialize(deserializer)?;
        check_max_speed(&raw.name, raw.speed.max()).map_err(serde::de::Error::custom)?;
        Ok(Self {
            name: raw.name,
            speed: raw.speed,
        })
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
