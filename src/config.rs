//! Stored-session helpers for commands that need a logged-in user.

use agenda_core::session::SessionContext;
use anyhow::Result;

/// Load the stored session or explain how to get one.
pub fn require_session() -> Result<SessionContext> {
    match SessionContext::load()? {
        Some(session) => Ok(session),
        None => anyhow::bail!(
            "Not logged in.\n\n\
            Log in with:\n  \
            agenda login <email>"
        ),
    }
}
