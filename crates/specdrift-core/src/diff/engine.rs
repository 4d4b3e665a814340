//! Spec diff computation engine.
//!
//! The core entry point is [`diff_specs`], which accepts two spec documents
//! and produces an ordered `Vec<ChangeRecord>`. The computation is a
//! three-level set difference/intersection over sorted keys: paths, then
//! methods per common path, then schema fields per common method.

use crate::diff::model::ChangeRecord;
use crate::model::SpecDocument;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Compute the ordered change records between two spec documents.
///
/// Emission order is fully deterministic:
/// 1. Endpoints added (sorted by path), each listing its sorted methods
/// 2. Endpoints removed (sorted by path), each listing its sorted methods
/// 3. Per common path (sorted): methods added (sorted), methods removed
///    (sorted), then per common method (sorted): fields added, fields
///    removed, type changes (each sorted by field name)
///
/// Returns an empty vector when the documents are structurally identical
/// under the comparison rules. Never fails: missing optional levels are
/// treated as empty mappings and type tags are compared as opaque strings.
pub fn diff_specs(old: &SpecDocument, new: &SpecDocument) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();

    let old_paths: BTreeSet<&str> = old.paths.keys().map(String::as_str).collect();
    let new_paths: BTreeSet<&str> = new.paths.keys().map(String::as_str).collect();

    // Endpoint-level changes, listing each endpoint's method names.
    for path in new_paths.difference(&old_paths) {
        changes.push(ChangeRecord::EndpointAdded {
            path: (*path).to_string(),
            methods: new.paths[*path].keys().cloned().collect(),
        });
    }
    for path in old_paths.difference(&new_paths) {
        changes.push(ChangeRecord::EndpointRemoved {
            path: (*path).to_string(),
            methods: old.paths[*path].keys().cloned().collect(),
        });
    }

    // Method- and field-level changes for paths present in both documents.
    for path in old_paths.intersection(&new_paths) {
        let old_methods = &old.paths[*path];
        let new_methods = &new.paths[*path];

        let old_names: BTreeSet<&str> = old_methods.keys().map(String::as_str).collect();
        let new_names: BTreeSet<&str> = new_methods.keys().map(String::as_str).collect();

        for method in new_names.difference(&old_names) {
            changes.push(ChangeRecord::MethodAdded {
                path: (*path).to_string(),
                method: (*method).to_string(),
            });
        }
        for method in old_names.difference(&new_names) {
            changes.push(ChangeRecord::MethodRemoved {
                path: (*path).to_string(),
                method: (*method).to_string(),
            });
        }

        // Response schemas for methods present in both documents.
        for method in old_names.intersection(&new_names) {
            diff_fields(
                path,
                method,
                old_methods[*method].response_schema(),
                new_methods[*method].response_schema(),
                &mut changes,
            );
        }
    }

    debug!(changes = changes.len(), "spec diff computed");
    changes
}

/// Compute the ordered change records and render them as their canonical
/// human-readable lines.
pub fn diff_spec_lines(old: &SpecDocument, new: &SpecDocument) -> Vec<String> {
    diff_specs(old, new)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Compare the response field schemas of a path+method present in both
/// documents: added fields, removed fields, then type changes.
fn diff_fields(
    path: &str,
    method: &str,
    old_fields: &BTreeMap<String, String>,
    new_fields: &BTreeMap<String, String>,
    changes: &mut Vec<ChangeRecord>,
) {
    let old_names: BTreeSet<&str> = old_fields.keys().map(String::as_str).collect();
    let new_names: BTreeSet<&str> = new_fields.keys().map(String::as_str).collect();

    for field in new_names.difference(&old_names) {
        changes.push(ChangeRecord::FieldAdded {
            path: path.to_string(),
            method: method.to_string(),
            field: (*field).to_string(),
            field_type: new_fields[*field].clone(),
        });
    }

    for field in old_names.difference(&new_names) {
        changes.push(ChangeRecord::FieldRemoved {
            path: path.to_string(),
            method: method.to_string(),
            field: (*field).to_string(),
            field_type: old_fields[*field].clone(),
        });
    }

    // Type changes: same field name, differing tag (plain string inequality).
    for field in old_names.intersection(&new_names) {
        let old_type = &old_fields[*field];
        let new_type = &new_fields[*field];
        if old_type != new_type {
            changes.push(ChangeRecord::FieldTypeChanged {
                path: path.to_string(),
                method: method.to_string(),
                field: (*field).to_string(),
                old_type: old_type.clone(),
                new_type: new_type.clone(),
            });
        }
    }
}
