//! `tally demo`: the book and vehicle demonstration scripts.

use anyhow::Context;
use tally_config::TallyConfig;
use tally_core::entities::{Boat, Book, Car, FlightRules, Fiction, NonFiction, Plane, Vehicle};
use tally_core::traits::{Describe, Movable, Readable};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{DemoArgs, DemoTarget};
use crate::output::output;
use crate::render;
use crate::report::{DemoReport, Section};

/// Handle `tally demo`.
pub fn handle(args: &DemoArgs, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = run(args.target, config.flight_rules())?;
    output(&report, flags.resolve_format(config.general.format))
}

pub fn run(target: DemoTarget, rules: FlightRules) -> anyhow::Result<DemoReport> {
    tracing::debug!(?target, ?rules, "running demo");
    match target {
        DemoTarget::Books => books(),
        DemoTarget::Vehicles => vehicles(rules),
        DemoTarget::All => {
            let mut report = books()?;
            report.merge(vehicles(rules)?);
            Ok(report)
        }
    }
}

fn books() -> anyhow::Result<DemoReport> {
    let mut novel = Fiction::new(
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", 180, 1925)
            .context("failed to build demo novel")?,
        "Classic",
    );
    let mut textbook = NonFiction::new(
        Book::new("Python Crash Course", "Eric Matthes", 544, 2019)
            .context("failed to build demo textbook")?,
        "Programming",
    );

    let mut cataloguing = Section::new("Cataloguing");
    for character in ["Jay Gatsby", "Daisy Buchanan"] {
        novel.add_character(character);
        cataloguing.line(render::character_line(novel.book(), character));
    }
    cataloguing.line(render::note_line(
        &textbook.add_note(42, "Important section on lists!"),
    ));

    let mut collection = Section::new("Book Collection");
    let shelf: [&dyn Readable; 2] = [&novel, &textbook];
    for book in shelf {
        collection.line(book.describe());
    }

    let mut session = Section::new("Reading Session");
    let outcome = novel.read(50);
    session.line(render::read_line(novel.book(), &outcome));
    session.line(render::bookmark_line(&novel.bookmark()));
    session.line(render::progress_line(novel.progress_percent()));

    let mut notes = Section::new("Notes from textbook");
    for line in render::notes_lines(textbook.notes()) {
        notes.line(line);
    }

    Ok(DemoReport {
        sections: vec![cataloguing, collection, session, notes],
        books: vec![novel.into(), textbook.into()],
        vehicles: Vec::new(),
    })
}

/// The three demo vehicles, iterable as trait objects.
struct Fleet {
    car: Car,
    boat: Boat,
    plane: Plane,
}

impl Fleet {
    fn new(rules: FlightRules) -> anyhow::Result<Self> {
        let car = Car::new(
            Vehicle::new("Toyota Camry", 120).context("failed to build demo car")?,
            "Hybrid",
        );
        let boat = Boat::new(
            Vehicle::new("Sea Breeze", 35).context("failed to build demo boat")?,
            "Sailing Yacht",
        );
        let plane = Plane::with_rules(
            Vehicle::new("Boeing 737", 550).context("failed to build demo plane")?,
            41_000,
            rules,
        )
        .context("failed to build demo plane")?;
        Ok(Self { car, boat, plane })
    }

    fn each(&self) -> [&dyn Movable; 3] {
        [&self.car, &self.boat, &self.plane]
    }

    fn each_mut(&mut self) -> [&mut dyn Movable; 3] {
        [&mut self.car, &mut self.boat, &mut self.plane]
    }

    fn movement_section(&self, heading: &str) -> Section {
        let mut section = Section::new(heading);
        for vehicle in self.each() {
            section.line(render::movement_line(vehicle.name(), vehicle.movement()));
        }
        section
    }
}

fn vehicles(rules: FlightRules) -> anyhow::Result<DemoReport> {
    let mut fleet = Fleet::new(rules)?;

    let mut starting = Section::new("Starting all vehicles");
    for vehicle in fleet.each() {
        starting.line(render::event_line(vehicle.name(), vehicle.start()));
    }

    let mut accelerating = Section::new("Accelerating vehicles");
    for vehicle in fleet.each_mut() {
        let outcome = vehicle.accelerate(30);
        accelerating.line(render::accelerate_line(vehicle.vehicle(), &outcome));
    }

    let moving = fleet.movement_section("Moving vehicles");

    let mut specific = Section::new("Vehicle-specific behaviors");
    specific.line(render::event_line(fleet.car.name(), fleet.car.honk()));
    specific.line(render::event_line(fleet.boat.name(), fleet.boat.anchor()));
    let result = fleet.plane.take_off();
    specific.line(render::take_off_line(fleet.plane.name(), &result));

    let mut climbing = Section::new("More acceleration and altitude");
    let outcome = fleet.plane.accelerate(150);
    climbing.line(render::accelerate_line(fleet.plane.vehicle(), &outcome));
    let result = fleet.plane.take_off();
    climbing.line(render::take_off_line(fleet.plane.name(), &result));
    let outcome = fleet.plane.climb(10_000);
    climbing.line(render::climb_line(&fleet.plane, &outcome));

    let final_status = fleet.movement_section("Final movement status");

    let mut stopping = Section::new("Stopping all vehicles");
    for vehicle in fleet.each_mut() {
        let event = vehicle.stop();
        stopping.line(render::event_line(vehicle.name(), event));
    }

    let Fleet { car, boat, plane } = fleet;
    Ok(DemoReport {
        sections: vec![
            starting,
            accelerating,
            moving,
            specific,
            climbing,
            final_status,
            stopping,
        ],
        books: Vec::new(),
        vehicles: vec![car.into(), boat.into(), plane.into()],
    })
}
