//! Sentences for the console trace.
//!
//! The core returns structured outcomes; this is the only place they become
//! prose.

use tally_core::entities::{Book, Note, Plane, Vehicle};
use tally_core::enums::{Movement, VehicleEvent};
use tally_core::outcome::{Advance, Rejection};
use tally_core::traits::Movable;

// ---------------------------------------------------------------------------
// Books
// ---------------------------------------------------------------------------

pub fn read_line(book: &Book, outcome: &Advance) -> String {
    match outcome {
        Advance::Advanced { from, to } => format!(
            "Read {} pages. Now on page {to} of {}.",
            to - from,
            book.pages()
        ),
        Advance::Clamped { .. } => format!("Finished reading '{}'!", book.title()),
        Advance::Rejected {
            reason: Rejection::NonPositiveIncrement { .. },
        } => String::from("Must read at least one page."),
        Advance::Rejected {
            reason: Rejection::AtLimit { .. },
        } => format!("Already finished '{}'.", book.title()),
        Advance::Rejected { reason } => format!("Cannot read '{}': {reason}.", book.title()),
    }
}

pub fn bookmark_line(result: &Result<u32, Rejection>) -> String {
    match result {
        Ok(page) => format!("Bookmarked page {page}."),
        Err(Rejection::NothingRead) => String::from("No page to bookmark. Start reading first!"),
        Err(reason) => format!("Cannot bookmark: {reason}."),
    }
}

pub fn character_line(book: &Book, character: &str) -> String {
    format!("Added {character} to '{}'.", book.title())
}

pub fn note_line(result: &Result<&Note, Rejection>) -> String {
    match result {
        Ok(note) => format!("Note added to page {}.", note.page),
        Err(Rejection::PageOutOfRange { pages, .. }) => {
            format!("Invalid page number. Book has {pages} pages.")
        }
        Err(reason) => format!("Cannot add note: {reason}."),
    }
}

/// One line per note, or a single placeholder line.
pub fn notes_lines(notes: &[Note]) -> Vec<String> {
    if notes.is_empty() {
        return vec![String::from("No notes have been taken.")];
    }
    std::iter::once(String::from("Notes:"))
        .chain(
            notes
                .iter()
                .map(|note| format!("- Page {}: {}", note.page, note.text)),
        )
        .collect()
}

pub fn progress_line(percent: f64) -> String {
    format!("Reading progress: {percent:.1}%")
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

pub fn event_line(name: &str, event: VehicleEvent) -> String {
    match event {
        VehicleEvent::Started => format!("{name} is starting up."),
        VehicleEvent::Stopped => format!("{name} has stopped."),
        VehicleEvent::Honked => format!("{name} goes BEEP BEEP!"),
        VehicleEvent::Anchored => format!("{name} has dropped anchor."),
    }
}

pub fn accelerate_line(vehicle: &Vehicle, outcome: &Advance) -> String {
    let name = vehicle.name();
    match outcome {
        Advance::Advanced { to, .. } => format!("{name} accelerated to {to} units."),
        Advance::Clamped { .. }
        | Advance::Rejected {
            reason: Rejection::AtLimit { .. },
        } => format!(
            "{name} has reached maximum speed of {} units.",
            vehicle.max_speed()
        ),
        Advance::Rejected { reason } => format!("{name} cannot accelerate: {reason}."),
    }
}

pub fn movement_line(name: &str, movement: Movement) -> String {
    match movement {
        Movement::Moving { .. } => format!("{name} is moving."),
        Movement::Driving { speed } => format!("{name} is driving on the road at {speed} mph."),
        Movement::Sailing { speed } => {
            format!("{name} is sailing across the water at {speed} knots.")
        }
        Movement::Taxiing { speed } => format!("{name} is taxiing on the runway at {speed} mph."),
        Movement::Flying { speed, altitude } => format!(
            "{name} is flying through the air at {speed} mph and altitude of {altitude} feet."
        ),
    }
}

pub fn take_off_line(name: &str, result: &Result<u32, Rejection>) -> String {
    match result {
        Ok(altitude) => format!("{name} is taking off! Current altitude: {altitude} feet."),
        Err(Rejection::InsufficientSpeed { .. }) => format!("{name} needs more speed to take off."),
        Err(reason) => format!("{name} cannot take off: {reason}."),
    }
}

pub fn climb_line(plane: &Plane, outcome: &Advance) -> String {
    let name = plane.name();
    match outcome {
        Advance::Advanced { to, .. } => format!("{name} climbed to {to} feet."),
        Advance::Clamped { .. }
        | Advance::Rejected {
            reason: Rejection::AtLimit { .. },
        } => format!(
            "{name} has reached maximum altitude of {} feet.",
            plane.max_altitude()
        ),
        Advance::Rejected {
            reason: Rejection::NotAirborne,
        } => format!("{name} needs to take off first."),
        Advance::Rejected { reason } => format!("{name} cannot climb: {reason}."),
    }
}
