use clap::Parser;

use crate::cli::LogLevel;

/// The scaffold itself takes no arguments: the layout is fixed and is always
/// created next to the executable. Only the log verbosity is adjustable.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}
