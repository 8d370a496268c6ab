use super::args::{Cli, Commands};
use super::handlers;
use crate::context::{ConfigOverrides, ExecutionContext};
use crate::presentation::guidance::{GuidanceContext, render_guidance};
use anyhow::Result;
use is_terminal::IsTerminal;
use pokedex_core::{DataPaths, resolve_data_dir};
use pokedex_runtime::Config;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&DataPaths::new(data_dir));
        return Ok(());
    };

    let overrides = ConfigOverrides {
        source: cli.source.map(Into::into),
        offline: cli.offline,
        language: cli.language,
        version: cli.game_version,
    };
    let ctx = ExecutionContext::new(data_dir, overrides);

    match command {
        Commands::Show {
            queries,
            format,
            shiny,
            mega,
        } => handlers::show::handle(
            &ctx,
            &queries,
            handlers::show::ShowOptions {
                format,
                shiny,
                mega,
            },
        ),

        Commands::Versions => handlers::versions::handle(&ctx),

        Commands::Types => handlers::types::handle(),

        Commands::Prefetch { from, to } => handlers::prefetch::handle(&ctx, from, to),
    }
}

fn show_guidance(paths: &DataPaths) {
    let snapshot = Config::load_from(&paths.config_file())
        .map(|config| config.database_path(paths))
        .unwrap_or_else(|_| paths.database_file());

    let has_cached_records = std::fs::read_dir(paths.records_dir())
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);

    let context = GuidanceContext {
        snapshot_installed: snapshot.exists(),
        has_cached_records,
    };
    println!(
        "{}",
        render_guidance(&context, std::io::stdout().is_terminal())
    );
}
