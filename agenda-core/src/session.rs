//! Stored session context.
//!
//! The token and admin flag travel as an explicit value handed to
//! collaborators at call time, never as ambient global state. The CLI
//! loads one per invocation from the platform config directory.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

pub const DEFAULT_API_URL: &str = "http://localhost:5050/api";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Everything a command needs to talk to the backend as a logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Opaque bearer token issued by `POST /auth/login`.
    pub token: String,
    /// Gates event creation client-side.
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl SessionContext {
    /// Session file at ~/.config/agenda/session.toml
    pub fn path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("session.toml"))
    }

    /// Load the stored session, if any.
    pub fn load() -> AgendaResult<Option<SessionContext>> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let session = toml::from_str(&contents)
            .map_err(|e| AgendaError::Serialization(format!("Invalid session file: {e}")))?;

        Ok(Some(session))
    }

    pub fn save(&self) -> AgendaResult<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| AgendaError::Serialization(e.to_string()))?;
        fs::write(&path, contents)?;

        Ok(())
    }

    /// Remove the stored session. A missing file is not an error.
    pub fn clear() -> AgendaResult<()> {
        let path = Self::path()?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        Ok(())
    }
}
