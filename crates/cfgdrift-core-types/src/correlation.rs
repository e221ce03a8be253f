//! Correlation types for run tracking
//!
//! Every drift check is one run. The run id is attached to the log events
//! of that run and to the report it produces, so a report can be matched
//! with the log lines that explain it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single drift-check run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Generate a new random RunId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through a run for correlation
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: RunId,
}

impl RunContext {
    /// Create a new context with a fresh RunId
    pub fn new() -> Self {
        Self {
            run_id: RunId::new(),
        }
    }

    /// Create a context with an existing RunId
    pub fn with_run_id(run_id: RunId) -> Self {
        Self { run_id }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}
