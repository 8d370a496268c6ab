use crate::types::OutputFormat;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show Pokémon by name or national dex number")]
    Show {
        #[arg(required = true, value_name = "QUERY")]
        queries: Vec<String>,

        #[arg(long, short, default_value = "card")]
        format: OutputFormat,

        #[arg(long, help = "Use the shiny sprite")]
        shiny: bool,

        #[arg(long, help = "Also draw every mega form's sprite")]
        mega: bool,
    },

    #[command(about = "List game versions known to the snapshot")]
    Versions,

    #[command(about = "List the types with their colors and weaknesses")]
    Types,

    #[command(about = "Cache records and sprites for a range of dex numbers")]
    Prefetch {
        #[arg(value_name = "FROM")]
        from: u32,

        #[arg(value_name = "TO")]
        to: u32,
    },
}
