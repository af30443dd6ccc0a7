//! Analyst session store.
//!
//! Holds at most one active analyst record (name plus role label) and can
//! round-trip it through a JSON file. Nothing richer is persisted anywhere
//! in the simulator.

use crate::error::{ChakraError, ChakraResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analyst {
    pub name: String,
    pub role: String,
}

pub struct SessionStore {
    active: RwLock<Option<Analyst>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            active: RwLock::new(None),
        }
    }

    pub fn active_session(&self) -> Option<Analyst> {
        self.active.read().clone()
    }

    /// Establish a session, replacing any previous one. Returns the record
    /// now active.
    pub fn save_analyst(&self, name: &str, role: &str) -> Analyst {
        let analyst = Analyst {
            name: name.into(),
            role: role.into(),
        };
        info!(name = %analyst.name, role = %analyst.role, "Analyst session established");
        *self.active.write() = Some(analyst.clone());
        analyst
    }

    pub fn clear(&self) {
        *self.active.write() = None;
    }

    /// Write the active session to a JSON file. No-op when no session exists.
    pub fn persist(&self, path: impl AsRef<Path>) -> ChakraResult<()> {
        let Some(analyst) = self.active_session() else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&analyst)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load a previously persisted session. A missing file is not an error;
    /// a malformed one is.
    pub fn restore(&self, path: impl AsRef<Path>) -> ChakraResult<bool> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(false);
        }
        let content = std::fs::read_to_string(path)?;
        let analyst: Analyst = serde_json::from_str(&content)
            .map_err(|e| ChakraError::Session(format!("malformed session file: {}", e)))?;
        *self.active.write() = Some(analyst);
        Ok(true)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
