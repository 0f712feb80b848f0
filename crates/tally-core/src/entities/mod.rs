//! Entity structs for books and vehicles.
//!
//! Variants wrap their base entity rather than extending it. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! validation.

mod boat;
mod book;
mod car;
mod fiction;
mod kinds;
mod nonfiction;
mod plane;
mod vehicle;

pub use boat::Boat;
pub use book::Book;
pub use car::Car;
pub use fiction::Fiction;
pub use kinds::{BookKind, VehicleKind};
pub use nonfiction::{NonFiction, Note};
pub use plane::{FlightRules, Plane};
pub use vehicle::Vehicle;
