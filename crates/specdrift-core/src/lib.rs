//! specdrift core - spec document model, loader, and diff engine
//!
//! This crate provides the foundational pieces of specdrift:
//! - Typed spec document model with optional-field defaulting
//! - JSON file loader with a distinct load/parse error taxonomy
//! - Deterministic spec diff engine producing ordered change records
//! - Human-readable rendering of change records
//!
//! The diff engine is pure: no I/O, no shared state, and identical inputs
//! always produce identical output sequences.

pub mod diff;
pub mod errors;
pub mod loader;
pub mod model;

// Re-export commonly used types
pub use diff::{diff_spec_lines, diff_specs, render_human_summary, ChangeRecord};
pub use errors::{Result, SpecDriftError};
pub use loader::load_spec;
pub use model::{MethodDescriptor, PathItem, ResponseDescriptor, SpecDocument};
