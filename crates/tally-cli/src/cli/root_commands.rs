use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Replay a demonstration script.
    Demo(DemoArgs),
    /// Print the JSON schema of an entity type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DemoArgs {
    /// Which demonstration to run.
    #[arg(value_enum, default_value = "all")]
    pub target: DemoTarget,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DemoTarget {
    Books,
    Vehicles,
    All,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub entity: SchemaEntity,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaEntity {
    Book,
    Fiction,
    NonFiction,
    Vehicle,
    Car,
    Boat,
    Plane,
    BookKind,
    VehicleKind,
    Advance,
    Rejection,
}
