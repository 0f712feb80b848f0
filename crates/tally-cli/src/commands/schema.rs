use schemars::{Schema, schema_for};
use tally_core::entities::{
    Boat, Book, BookKind, Car, Fiction, NonFiction, Plane, Vehicle, VehicleKind,
};
use tally_core::outcome::{Advance, Rejection};

use crate::cli::root_commands::{SchemaArgs, SchemaEntity};

/// Handle `tally schema`. Schemas are always printed as JSON.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", render(args.entity)?);
    Ok(())
}

pub fn schema(entity: SchemaEntity) -> Schema {
    match entity {
        SchemaEntity::Book => schema_for!(Book),
        SchemaEntity::Fiction => schema_for!(Fiction),
        SchemaEntity::NonFiction => schema_for!(NonFiction),
        SchemaEntity::Vehicle => schema_for!(Vehicle),
        SchemaEntity::Car => schema_for!(Car),
        SchemaEntity::Boat => schema_for!(Boat),
        SchemaEntity::Plane => schema_for!(Plane),
        SchemaEntity::BookKind => schema_for!(BookKind),
        SchemaEntity::VehicleKind => schema_for!(VehicleKind),
        SchemaEntity::Advance => schema_for!(Advance),
        SchemaEntity::Rejection => schema_for!(Rejection),
    }
}

fn render(entity: SchemaEntity) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&schema(entity))?)
}
