//! Shared interfaces over the entity families.
//!
//! Variants compose a base entity (`Book` or `Vehicle`) and expose it through
//! [`Readable::book`] / [`Movable::vehicle`]. The provided methods route every
//! counter change through the base, so each variant gets the same clamping
//! rules without re-implementing them.

use crate::entities::{Book, Vehicle};
use crate::enums::{Movement, VehicleEvent};
use crate::outcome::{Advance, Rejection};

/// Human-readable one-line summary.
///
/// Variant summaries embed the summary of the base entity they wrap.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Anything that wraps a [`Book`].
pub trait Readable: Describe {
    fn book(&self) -> &Book;

    fn book_mut(&mut self) -> &mut Book;

    fn read(&mut self, pages: i64) -> Advance {
        Book::read(self.book_mut(), pages)
    }

    fn bookmark(&mut self) -> Result<u32, Rejection> {
        Book::bookmark(self.book_mut())
    }

    fn progress_percent(&self) -> f64 {
        Book::progress_percent(self.book())
    }
}

/// Anything that wraps a [`Vehicle`].
pub trait Movable: Describe {
    fn vehicle(&self) -> &Vehicle;

    fn vehicle_mut(&mut self) -> &mut Vehicle;

    /// Variant-specific motion report.
    fn movement(&self) -> Movement;

    fn name(&self) -> &str {
        self.vehicle().name()
    }

    fn start(&self) -> VehicleEvent {
        Vehicle::start(self.vehicle())
    }

    fn stop(&mut self) -> VehicleEvent {
        Vehicle::stop(self.vehicle_mut())
    }

    fn accelerate(&mut self, increase: i64) -> Advance {
        Vehicle::accelerate(self.vehicle_mut(), increase)
    }
}
