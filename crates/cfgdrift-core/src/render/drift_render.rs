//! Terminal rendering of a drift report.

use crate::model::{DriftReport, KeyReport};

/// Width of the right-aligned key column
pub const LABEL_WIDTH: usize = 45;

/// Placed between the key column and the values
pub const LABEL_SEPARATOR: &str = ": ";

/// Column the first value starts at; wrapped values are indented to it
pub const VALUE_INDENT: usize = LABEL_WIDTH + LABEL_SEPARATOR.len();

/// Width used when the terminal width cannot be determined
pub const DEFAULT_WIDTH: usize = 80;

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Total terminal width in columns
    pub width: usize,
}

impl RenderOptions {
    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    /// Columns left for values once the key column is taken
    pub fn value_width(&self) -> usize {
        self.width.saturating_sub(LABEL_WIDTH)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

/// Render every divergent key of `report`, ordered by key name.
///
/// A clean report renders as a single summary line.
pub fn render_drift_report(report: &DriftReport, options: &RenderOptions) -> String {
    if report.is_clean() {
        return format!(
            "No configuration drift across {} node(s).\n",
            report.node_count
        );
    }

    report
        .keys
        .values()
        .map(|key_report| render_key_report(key_report, options))
        .collect()
}

/// Render one key.
///
/// `key: n1 = v1; n2 = v2` when it fits in the value width, otherwise the
/// first entry on the key line and every further entry on its own line,
/// indented under the first.
pub fn render_key_report(report: &KeyReport, options: &RenderOptions) -> String {
    let joined = report.joined();

    if joined.chars().count() <= options.value_width() {
        return format!(
            "{:>width$}{}{}\n",
            report.key,
            LABEL_SEPARATOR,
            joined,
            width = LABEL_WIDTH
        );
    }

    let mut out = String::new();
    for (i, entry) in report.entries().iter().enumerate() {
        if i == 0 {
            out.push_str(&format!(
                "{:>width$}{}{}\n",
                report.key,
                LABEL_SEPARATOR,
                entry,
                width = LABEL_WIDTH
            ));
        } else {
            out.push_str(&format!("{:indent$}{}\n", "", entry, indent = VALUE_INDENT));
        }
    }
    out
}
