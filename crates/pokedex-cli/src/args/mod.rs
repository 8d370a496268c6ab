// NOTE: flat command set
//
// The tool has one main action (show) and a few maintenance commands, so
// subcommands stay flat. Options that shape data resolution (where data
// lives, which source answers, language and game version) are global and
// override config.toml for this invocation only.

mod commands;
pub mod hints;

pub use commands::*;

use crate::types::{LogLevel, SourceArg};
use clap::Parser;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "A Pokédex for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory [default: $POKEDEX_PATH or the system data directory]"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Where cache misses are answered from")]
    pub source: Option<SourceArg>,

    #[arg(long, global = true, help = "Never touch the network")]
    pub offline: bool,

    #[arg(long, global = true, help = "Language of names and texts (e.g. en, fr, ja)")]
    pub language: Option<String>,

    #[arg(long, global = true, help = "Game version the flavor text is taken from")]
    pub game_version: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
