use crate::context::ExecutionContext;
use anyhow::Result;
use std::io::{self, Write};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let versions = ctx.pokedex()?.versions()?;
    let current = &ctx.config()?.version;

    let mut out = io::stdout().lock();
    for version in &versions {
        let marker = if version == current { "*" } else { " " };
        writeln!(out, "{} {}", marker, version)?;
    }
    Ok(())
}
