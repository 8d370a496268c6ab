use crate::args::hints;
use crate::context::ExecutionContext;
use anyhow::{Result, bail};
use pokedex_types::MAX_SPECIES_ID;

pub fn handle(ctx: &ExecutionContext, from: u32, to: u32) -> Result<()> {
    if from == 0 || to > MAX_SPECIES_ID || from > to {
        bail!(
            "invalid range {}..{}: expected 1 <= FROM <= TO <= {}",
            from,
            to,
            MAX_SPECIES_ID
        );
    }

    let pokedex = ctx.pokedex()?;
    let total = to - from + 1;

    let report = pokedex.prefetch(from, to, |id, result| {
        let done = id - from + 1;
        match result {
            Ok(entry) => eprintln!("[{}/{}] #{:03} {}", done, total, id, entry.pokemon.name),
            Err(err) => eprintln!("[{}/{}] #{:03} failed: {}", done, total, id, err),
        }
    })?;

    println!(
        "Fetched {}, already cached {}, failed {}",
        report.fetched.len(),
        report.already_cached.len(),
        report.failed.len()
    );

    if let (Some((first, _)), Some((last, _))) = (report.failed.first(), report.failed.last()) {
        for (id, reason) in &report.failed {
            println!("  #{:03}: {}", id, reason);
        }
        println!("Retry with: {}", hints::fmt::prefetch(*first, *last));
    }

    Ok(())
}
