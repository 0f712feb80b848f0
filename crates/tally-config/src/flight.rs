//! Takeoff thresholds applied to planes built by the CLI.

use serde::{Deserialize, Serialize};
use tally_core::entities::FlightRules;

use crate::ConfigError;

const fn default_takeoff_speed() -> u32 {
    160
}

const fn default_takeoff_altitude() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FlightConfig {
    /// Minimum speed for a plane to leave the ground.
    #[serde(default = "default_takeoff_speed")]
    pub takeoff_speed: u32,

    /// Altitude reached immediately after takeoff, in feet.
    #[serde(default = "default_takeoff_altitude")]
    pub takeoff_altitude: u32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            takeoff_speed: default_takeoff_speed(),
            takeoff_altitude: default_takeoff_altitude(),
        }
    }
}

impl FlightConfig {
    /// Both thresholds must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.takeoff_speed == 0 {
            return Err(ConfigError::InvalidValue {
                field: "flight.takeoff_speed".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.takeoff_altitude == 0 {
            return Err(ConfigError::InvalidValue {
                field: "flight.takeoff_altitude".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn rules(&self) -> FlightRules {
        FlightRules {
            takeoff_speed: self.takeoff_speed,
            takeoff_altitude: self.takeoff_altitude,
        }
    }
}
