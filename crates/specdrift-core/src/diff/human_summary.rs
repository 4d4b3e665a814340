//! Human-readable rendering for spec diffs.

use crate::diff::model::ChangeRecord;

/// Render change records as their canonical human-readable lines, one per
/// record, preserving order.
pub fn render_change_lines(changes: &[ChangeRecord]) -> Vec<String> {
    changes.iter().map(ToString::to_string).collect()
}

/// Render a single newline-joined summary of the change records.
///
/// The summary is intended for display and for embedding in a
/// test-generation prompt. It is informational only and does not affect the
/// structured records.
pub fn render_human_summary(changes: &[ChangeRecord]) -> String {
    render_change_lines(changes).join("\n")
}
