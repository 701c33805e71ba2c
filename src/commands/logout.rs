use agenda_core::session::SessionContext;
use anyhow::Result;

pub fn run() -> Result<()> {
    SessionContext::clear()?;
    println!("Logged out.");

    Ok(())
}
