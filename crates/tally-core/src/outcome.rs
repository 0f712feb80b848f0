//! Outcome types returned by state-changing operations.
//!
//! Every operation on an entity reports what happened as a value. Callers
//! inspect the outcome; nothing here panics or aborts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Advance
// ---------------------------------------------------------------------------

/// Result of advancing a bounded counter (reading, accelerating, climbing).
///
/// ```text
/// d <= 0           → rejected (non_positive_increment)
/// c == max         → rejected (at_limit)
/// c + d > max      → clamped to max
/// otherwise        → advanced to c + d
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Advance {
    /// The full increment was applied.
    Advanced { from: u32, to: u32 },
    /// The increment overshot the maximum; the counter saturated at `to`.
    Clamped { from: u32, to: u32 },
    /// Nothing changed.
    Rejected { reason: Rejection },
}

impl Advance {
    /// The counter value after the operation, if it changed.
    #[must_use]
    pub const fn value(&self) -> Option<u32> {
        match self {
            Self::Advanced { to, .. } | Self::Clamped { to, .. } => Some(*to),
            Self::Rejected { .. } => None,
        }
    }

    /// Amount actually applied to the counter.
    #[must_use]
    pub const fn applied(&self) -> u32 {
        match self {
            Self::Advanced { from, to } | Self::Clamped { from, to } => {
                to.saturating_sub(*from)
            }
            Self::Rejected { .. } => 0,
        }
    }

    #[must_use]
    pub const fn is_clamped(&self) -> bool {
        matches!(self, Self::Clamped { .. })
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected { reason } => Some(reason),
            Self::Advanced { .. } | Self::Clamped { .. } => None,
        }
    }

    pub(crate) const fn rejected(reason: Rejection) -> Self {
        Self::Rejected { reason }
    }
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

/// Why an operation left the entity unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Requested increment was zero or negative.
    #[error("increment must be positive, got {requested}")]
    NonPositiveIncrement { requested: i64 },

    /// The counter already sits at its maximum.
    #[error("already at the limit of {limit}")]
    AtLimit { limit: u32 },

    /// Bookmarking requires at least one page read.
    #[error("nothing has been read yet")]
    NothingRead,

    /// Note page outside `1..=pages`.
    #[error("page {page} is outside 1..={pages}")]
    PageOutOfRange { page: u32, pages: u32 },

    /// Takeoff attempted below the takeoff speed.
    #[error("speed {speed} is below the takeoff speed of {required}")]
    InsufficientSpeed { speed: u32, required: u32 },

    /// Climb attempted on the ground.
    #[error("not airborne")]
    NotAirborne,
}

impl Rejection {
    /// Stable identifier, matching the serialized `kind` tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NonPositiveIncrement { .. } => "non_positive_increment",
            Self::AtLimit { .. } => "at_limit",
            Self::NothingRead => "nothing_read",
            Self::PageOutOfRange { .. } => "page_out_of_range",
            Self::InsufficientSpeed { .. } => "insufficient_speed",
            Self::NotAirborne => "not_airborne",
        }
    }
}
