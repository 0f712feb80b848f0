//! Vehicle motion and lifecycle enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// How a vehicle is currently moving. Each vehicle kind reports its own mode.
///
/// ```text
/// Vehicle → moving
/// Car     → driving
/// Boat    → sailing
/// Plane   → taxiing (altitude == 0)
///         → flying  (altitude > 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Movement {
    Moving { speed: u32 },
    Driving { speed: u32 },
    Sailing { speed: u32 },
    Taxiing { speed: u32 },
    Flying { speed: u32, altitude: u32 },
}

impl Movement {
    #[must_use]
    pub const fn speed(self) -> u32 {
        match self {
            Self::Moving { speed }
            | Self::Driving { speed }
            | Self::Sailing { speed }
            | Self::Taxiing { speed }
            | Self::Flying { speed, .. } => speed,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Moving { .. } => "moving",
            Self::Driving { .. } => "driving",
            Self::Sailing { .. } => "sailing",
            Self::Taxiing { .. } => "taxiing",
            Self::Flying { .. } => "flying",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VehicleEvent
// ---------------------------------------------------------------------------

/// Acknowledgement of a vehicle action that carries no counter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VehicleEvent {
    Started,
    Stopped,
    Honked,
    Anchored,
}

impl VehicleEvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Stopped => "stopped",
            Self::Honked => "honked",
            Self::Anchored => "anchored",
        }
    }
}

impl fmt::Display for VehicleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
