//! Saturating counter bounded to `[0, max]`.
//!
//! Pages read, vehicle speed, and plane altitude are all a `BoundedCounter`.
//! The only way to move one forward is [`BoundedCounter::advance`], which
//! never overshoots and reports what it did as an [`Advance`].

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;
use crate::outcome::{Advance, Rejection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct BoundedCounter {
    value: u32,
    max: u32,
}

impl BoundedCounter {
    /// A counter at zero with the given ceiling.
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self { value: 0, max }
    }

    /// A counter starting at `value`.
    pub const fn with_value(value: u32, max: u32) -> Result<Self, CoreError> {
        if value > max {
            return Err(CoreError::InvalidCounter { value, max });
        }
        Ok(Self { value, max })
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    #[must_use]
    pub const fn is_at_limit(self) -> bool {
        self.value == self.max
    }

    /// `value / max` as a percentage. A zero-width counter reports 0.
    #[must_use]
    pub fn percent(self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.value) / f64::from(self.max) * 100.0
    }

    /// Move the counter forward by `delta`, saturating at `max`.
    pub fn advance(&mut self, delta: i64) -> Advance {
        if delta <= 0 {
            return Advance::rejected(Rejection::NonPositiveIncrement { requested: delta });
        }
        if self.is_at_limit() {
            return Advance::rejected(Rejection::AtLimit { limit: self.max });
        }

        let from = self.value;
        let headroom = i64::from(self.max - self.value);
        if delta > headroom {
            self.value = self.max;
            return Advance::Clamped { from, to: self.max };
        }

        // delta <= headroom, so the sum fits below max
        self.value = u32::try_from(i64::from(from) + delta).unwrap_or(self.max);
        Advance::Advanced {
            from,
            to: self.value,
        }
    }

    /// Jump straight to `value`, clamped to `max`. Returns the new value.
    pub fn set_clamped(&mut self, value: u32) -> u32 {
        self.value = value.min(self.max);
        self.value
    }

    pub const fn reset(&mut self) {
        self.value = 0;
    }
}

#[derive(Deserialize)]
struct RawCounter {
    value: u32,
    max: u32,
}

impl<'de> Deserialize<'de> for BoundedCounter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawCounter::deserialize(deserializer)?;
        Self::with_value(raw.value, raw.max).map_err(serde::de::Error::custom)
    }
}
