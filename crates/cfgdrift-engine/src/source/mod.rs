//! Snapshot sources.
//!
//! A source produces one [`RawNodeRecord`] per cluster node. The live source
//! runs the cluster admin tool; the captured source reads output that was
//! saved earlier. Both share the admin output parser and resolve node
//! addresses through a [`HostResolver`].
//!
//! All blocking I/O of a run happens here, before the core pipeline starts.

pub mod admin_output;
pub mod captured;
pub mod command;
pub mod config;
pub mod resolver;

pub use admin_output::{extract_address, parse_admin_output};
pub use captured::CapturedOutputSource;
pub use command::AdminCommandSource;
pub use config::SourceConfig;
pub use resolver::{resolver_for, DnsResolver, HostResolver, PassthroughResolver};

use cfgdrift_core::errors::Result;
use cfgdrift_core::model::RawNodeRecord;

/// Producer of per-node configuration records for one run
pub trait SnapshotSource {
    /// Human-readable description of where records come from
    fn target(&self) -> String;

    /// Capture one record per node, in the order nodes were reported
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be obtained or the raw output
    /// is not in the expected shape.
    fn capture(&self) -> Result<Vec<RawNodeRecord>>;
}
