use crate::presentation::render_type_chart;
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn handle() -> Result<()> {
    println!("{}", render_type_chart(std::io::stdout().is_terminal()));
    Ok(())
}
