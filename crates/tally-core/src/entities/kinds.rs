//! Tagged unions over the variant types, for heterogeneous collections.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Boat, Book, Car, Fiction, NonFiction, Plane, Vehicle};
use crate::enums::Movement;
use crate::traits::{Describe, Movable, Readable};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookKind {
    Fiction(Fiction),
    NonFiction(NonFiction),
}

impl BookKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fiction(_) => "fiction",
            Self::NonFiction(_) => "non_fiction",
        }
    }
}

impl Describe for BookKind {
    fn describe(&self) -> String {
        match self {
            Self::Fiction(book) => book.describe(),
            Self::NonFiction(book) => book.describe(),
        }
    }
}

impl Readable for BookKind {
    fn book(&self) -> &Book {
        match self {
            Self::Fiction(book) => book.book(),
            Self::NonFiction(book) => book.book(),
        }
    }

    fn book_mut(&mut self) -> &mut Book {
        match self {
            Self::Fiction(book) => book.book_mut(),
            Self::NonFiction(book) => book.book_mut(),
        }
    }
}

impl fmt::Display for BookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Fiction> for BookKind {
    fn from(book: Fiction) -> Self {
        Self::Fiction(book)
    }
}

impl From<NonFiction> for BookKind {
    fn from(book: NonFiction) -> Self {
        Self::NonFiction(book)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleKind {
    Car(Car),
    Boat(Boat),
    Plane(Plane),
}

impl VehicleKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car(_) => "car",
            Self::Boat(_) => "boat",
            Self::Plane(_) => "plane",
        }
    }
}

impl Describe for VehicleKind {
    fn describe(&self) -> String {
        match self {
            Self::Car(vehicle) => vehicle.describe(),
            Self::Boat(vehicle) => vehicle.describe(),
            Self::Plane(vehicle) => vehicle.describe(),
        }
    }
}

impl Movable for VehicleKind {
    fn vehicle(&self) -> &Vehicle {
        match self {
            Self::Car(vehicle) => vehicle.vehicle(),
            Self::Boat(vehicle) => vehicle.vehicle(),
            Self::Plane(vehicle) => vehicle.vehicle(),
        }
    }

    fn vehicle_mut(&mut self) -> &mut Vehicle {
        match self {
            Self::Car(vehicle) => vehicle.vehicle_mut(),
            Self::Boat(vehicle) => vehicle.vehicle_mut(),
            Self::Plane(vehicle) => vehicle.vehicle_mut(),
        }
    }

    fn movement(&self) -> Movement {
        match self {
            Self::Car(vehicle) => vehicle.movement(),
            Self::Boat(vehicle) => vehicle.movement(),
            Self::Plane(vehicle) => vehicle.movement(),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Car> for VehicleKind {
    fn from(vehicle: Car) -> Self {
        Self::Car(vehicle)
    }
}

impl From<Boat> for VehicleKind {
    fn from(vehicle: Boat) -> Self {
        Self::Boat(vehicle)
    }
}

impl From<Plane> for VehicleKind {
    fn from(vehicle: Plane) -> Self {
        Self::Plane(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fleet() -> Vec<VehicleKind> {
        vec![
            Car::new(Vehicle::new("Toyota Camry", 120).unwrap(), "Hybrid").into(),
            Boat::new(Vehicle::new("Sea Breeze", 35).unwrap(), "Sailing Yacht").into(),
            Plane::new(Vehicle::new("Boeing 737", 550).unwrap(), 41_000)
                .unwrap()
                .into(),
        ]
    }

    #[test]
    fn each_kind_reports_its_own_movement() {
        let mut fleet = fleet();
        for vehicle in &mut fleet {
            let _ = vehicle.accelerate(30);
        }
        let modes: Vec<&str> = fleet.iter().map(|v| v.movement().as_str()).collect();
        assert_eq!(modes, vec!["driving", "sailing", "taxiing"]);
    }

    #[test]
    fn acceleration_is_clamped_per_vehicle() {
        let mut fleet = fleet();
        let speeds: Vec<u32> = fleet
            .iter_mut()
            .map(|v| {
                let _ = v.accelerate(100);
                v.vehicle().current_speed()
            })
            .collect();
        assert_eq!(speeds, vec![100, 35, 100]);
    }

    #[test]
    fn book_kind_reads_through_variant() {
        let novel = Fiction::new(
            Book::new("The Great Gatsby", "F. Scott Fitzgerald", 180, 1925).unwrap(),
            "Classic",
        );
        let mut kind = BookKind::from(novel);
        let _ = kind.read(90);
        assert!((kind.progress_percent() - 50.0).abs() < 1e-9);
        assert!(kind.describe().starts_with("Fiction: "));
        assert_eq!(kind.as_str(), "fiction");
    }
}
