use tally_config::TallyConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;

pub mod demo;
pub mod schema;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Demo(args) => demo::handle(args, config, flags),
        Commands::Schema(args) => schema::handle(args),
    }
}
