use clap::ValueEnum;
use tally_config::DefaultFormat;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<DefaultFormat> for OutputFormat {
    fn from(format: DefaultFormat) -> Self {
        match format {
            DefaultFormat::Text => Self::Text,
            DefaultFormat::Json => Self::Json,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
}

impl GlobalFlags {
    /// Explicit `--format` wins over the configured default.
    #[must_use]
    pub fn resolve_format(&self, configured: DefaultFormat) -> OutputFormat {
        self.format.unwrap_or_else(|| configured.into())
    }
}
