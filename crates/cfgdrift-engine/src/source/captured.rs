//! Snapshot source over previously captured admin output.

use std::io::Read;
use std::path::Path;

use cfgdrift_core::errors::{DriftError, Result};
use cfgdrift_core::model::RawNodeRecord;

use super::admin_output::parse_admin_output;
use super::resolver::{HostResolver, PassthroughResolver};
use super::SnapshotSource;

/// Admin output read from a file or stream instead of a live cluster
pub struct CapturedOutputSource {
    origin: String,
    text: String,
    resolver: Box<dyn HostResolver>,
}

impl CapturedOutputSource {
    /// Wrap already loaded output text
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
            resolver: Box::new(PassthroughResolver),
        }
    }

    /// Load output from a file
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::Io`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DriftError::Io {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Ok(Self::new(path.display().to_string(), text))
    }

    /// Load output from a reader such as stdin
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::Io`] if reading fails.
    pub fn from_reader(origin: impl Into<String>, mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(origin, text))
    }

    /// Replace the default pass-through resolver
    pub fn with_resolver(mut self, resolver: Box<dyn HostResolver>) -> Self {
        self.resolver = resolver;
        self
    }
}

impl SnapshotSource for CapturedOutputSource {
    fn target(&self) -> String {
        self.origin.clone()
    }

    fn capture(&self) -> Result<Vec<RawNodeRecord>> {
        parse_admin_output(&self.text, self.resolver.as_ref())
    }
}
