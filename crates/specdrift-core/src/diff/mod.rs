//! Spec diff engine.
//!
//! Compares two spec documents and produces a deterministic, ordered list of
//! change records suitable for printing and for prompting downstream test
//! generation.
//!
//! ## Entry point
//!
//! ```ignore
//! use specdrift_core::diff::{diff_specs, render_human_summary};
//!
//! let changes = diff_specs(&old, &new);
//! let summary = render_human_summary(&changes);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output sequences,
//!   including order. Paths, methods, and fields are each visited in
//!   lexicographically sorted order.
//! - **Scoping**: field-level diffing only runs on the intersection of paths
//!   and methods; a wholly added or removed endpoint never enumerates its
//!   fields.
//! - **Open type tags**: field type tags are compared by plain string
//!   inequality and never validated against a known set, so
//!   forward-compatible new tags diff correctly.
//! - **No failure modes**: well-shaped documents never produce an error;
//!   missing optional levels are treated as empty mappings.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{diff_spec_lines, diff_specs};
pub use human_summary::{render_change_lines, render_human_summary};
pub use model::ChangeRecord;
