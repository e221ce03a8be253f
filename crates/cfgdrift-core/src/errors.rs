use cfgdrift_core_types::RunId;
use thiserror::Error;

/// Operation name attached to failures of the snapshot capture step
pub const OP_CAPTURE: &str = "capture";

/// Result type alias using DriftError
pub type Result<T> = std::result::Result<T, DriftError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests use to tell
/// bad input apart from a broken internal invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// A node's configuration line is not a `;`-separated list of `key = value`
    MalformedSnapshotLine,
    /// The admin tool output does not follow the header/config line layout
    MalformedSourceOutput,

    // Invariants
    /// Detector and aggregator disagree about a key
    InconsistentState,

    // Integration/IO
    ExternalCommand,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedSnapshotLine => "ERR_MALFORMED_SNAPSHOT_LINE",
            ExErrorKind::MalformedSourceOutput => "ERR_MALFORMED_SOURCE_OUTPUT",
            ExErrorKind::InconsistentState => "ERR_INCONSISTENT_STATE",
            ExErrorKind::ExternalCommand => "ERR_EXTERNAL_COMMAND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// True for kinds caused by the data handed to a run, false for kinds
    /// that point at the environment or at a defect.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::MalformedSnapshotLine | ExErrorKind::MalformedSourceOutput
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification used for programmatic handling plus the node
/// and key a failure is about, when known.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_id: Option<String>,
    config_key: Option<String>,
    run_id: Option<RunId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_id: None,
            config_key: None,
            run_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node context
    pub fn with_node_id(mut self, id: impl Into<String>) -> Self {
        self.node_id = Some(id.into());
        self
    }

    /// Add configuration key context
    pub fn with_config_key(mut self, key: impl Into<String>) -> Self {
        self.config_key = Some(key.into());
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the node context, if any
    pub fn node_id(&self) -> Option<&str> {
        self.node_id.as_deref()
    }

    /// Get the configuration key context, if any
    pub fn config_key(&self) -> Option<&str> {
        self.config_key.as_deref()
    }

    /// Get the run ID context, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(node_id) = &self.node_id {
            write!(f, " (node: {})", node_id)?;
        }
        if let Some(key) = &self.config_key {
            write!(f, " (key: {})", key)?;
        }
        if let Some(run_id) = &self.run_id {
            write!(f, " (run: {})", run_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for drift detection runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriftError {
    // ===== Input Errors =====
    /// A configuration line has a pair that does not split into `key = value`
    #[error("Malformed configuration line from node {node_id}: `{fragment}` is not a `key = value` pair")]
    MalformedSnapshotLine { node_id: String, fragment: String },

    /// The same key appears more than once on one configuration line
    #[error("Malformed configuration line from node {node_id}: key `{key}` appears more than once")]
    DuplicateConfigKey { node_id: String, key: String },

    /// The admin tool output does not have the expected layout
    #[error("Malformed admin output at line {line_no}: {reason}")]
    MalformedSourceOutput { line_no: usize, reason: String },

    // ===== Invariant Errors =====
    /// The aggregator was handed a key the detector should not have produced
    #[error("Inconsistent state for key {key}: {reason}")]
    InconsistentState { key: String, reason: String },

    // ===== Integration Errors =====
    /// The admin command ran but exited unsuccessfully
    #[error("Admin command `{command}` failed ({status}): {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    /// I/O failure (spawning the admin command, reading captured output)
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Report serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from DriftError to ExError
impl From<DriftError> for ExError {
    fn from(err: DriftError) -> Self {
        match err {
            DriftError::MalformedSnapshotLine { node_id, fragment } => {
                ExError::new(ExErrorKind::MalformedSnapshotLine)
                    .with_node_id(node_id)
                    .with_message(format!("`{}` is not a `key = value` pair", fragment))
            }

            DriftError::DuplicateConfigKey { node_id, key } => {
                ExError::new(ExErrorKind::MalformedSnapshotLine)
                    .with_node_id(node_id)
                    .with_config_key(key)
                    .with_message("key appears more than once on the line")
            }

            DriftError::MalformedSourceOutput { line_no, reason } => {
                ExError::new(ExErrorKind::MalformedSourceOutput)
                    .with_message(format!("line {}: {}", line_no, reason))
            }

            DriftError::InconsistentState { key, reason } => {
                ExError::new(ExErrorKind::InconsistentState)
                    .with_config_key(key)
                    .with_message(reason)
            }

            DriftError::CommandFailed {
                command,
                status,
                output,
            } => ExError::new(ExErrorKind::ExternalCommand)
                .with_op(OP_CAPTURE)
                .with_message(format!("`{}` exited with {}: {}", command, status, output)),

            DriftError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),

            DriftError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<std::io::Error> for DriftError {
    fn from(err: std::io::Error) -> Self {
        DriftError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DriftError {
    fn from(err: serde_json::Error) -> Self {
        DriftError::Serialization {
            message: err.to_string(),
        }
    }
}
