//! Spec diff output types.
//!
//! A [`ChangeRecord`] is an immutable value describing a single detected
//! difference between two spec documents. Its `Display` form is the
//! canonical human-readable change line consumed by the CLI printer and the
//! prompt builder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One detected difference between two spec documents.
///
/// Every record references exactly one path (and, where applicable, one
/// method and one field). Method lists on endpoint-level records are sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum ChangeRecord {
    /// Path present in the new document, absent in the old
    EndpointAdded {
        /// The added endpoint path
        path: String,
        /// Method names under the added path (sorted)
        methods: Vec<String>,
    },
    /// Path present in the old document, absent in the new
    EndpointRemoved {
        /// The removed endpoint path
        path: String,
        /// Method names under the removed path (sorted)
        methods: Vec<String>,
    },
    /// Method present in the new document, absent in the old, for a common path
    MethodAdded {
        /// The common endpoint path
        path: String,
        /// The added HTTP method name
        method: String,
    },
    /// Method present in the old document, absent in the new, for a common path
    MethodRemoved {
        /// The common endpoint path
        path: String,
        /// The removed HTTP method name
        method: String,
    },
    /// Field present in the new schema, absent in the old, for a common path+method
    FieldAdded {
        /// The common endpoint path
        path: String,
        /// The common HTTP method name
        method: String,
        /// The added field name
        field: String,
        /// Type tag of the field in the new schema
        field_type: String,
    },
    /// Field present in the old schema, absent in the new, for a common path+method
    FieldRemoved {
        /// The common endpoint path
        path: String,
        /// The common HTTP method name
        method: String,
        /// The removed field name
        field: String,
        /// Type tag of the field in the old schema
        field_type: String,
    },
    /// Field present in both schemas with differing type tags
    FieldTypeChanged {
        /// The common endpoint path
        path: String,
        /// The common HTTP method name
        method: String,
        /// The field whose type tag changed
        field: String,
        /// Type tag in the old schema
        old_type: String,
        /// Type tag in the new schema
        new_type: String,
    },
}

impl ChangeRecord {
    /// The endpoint path this record references.
    pub fn path(&self) -> &str {
        match self {
            ChangeRecord::EndpointAdded { path, .. }
            | ChangeRecord::EndpointRemoved { path, .. }
            | ChangeRecord::MethodAdded { path, .. }
            | ChangeRecord::MethodRemoved { path, .. }
            | ChangeRecord::FieldAdded { path, .. }
            | ChangeRecord::FieldRemoved { path, .. }
            | ChangeRecord::FieldTypeChanged { path, .. } => path,
        }
    }

    /// True for endpoint-level records (whole path added or removed).
    pub fn is_endpoint_level(&self) -> bool {
        matches!(
            self,
            ChangeRecord::EndpointAdded { .. } | ChangeRecord::EndpointRemoved { .. }
        )
    }
}

/// Render a method list in the `['GET', 'POST']` form used by the canonical
/// change lines.
fn method_list(methods: &[String]) -> String {
    let quoted: Vec<String> = methods.iter().map(|m| format!("'{m}'")).collect();
    format!("[{}]", quoted.join(", "))
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeRecord::EndpointAdded { path, methods } => {
                write!(f, "Endpoint added: {} {}", path, method_list(methods))
            }
            ChangeRecord::EndpointRemoved { path, methods } => {
                write!(f, "Endpoint removed: {} {}", path, method_list(methods))
            }
            ChangeRecord::MethodAdded { path, method } => {
                write!(f, "Endpoint {path}: method {method} added")
            }
            ChangeRecord::MethodRemoved { path, method } => {
                write!(f, "Endpoint {path}: method {method} removed")
            }
            ChangeRecord::FieldAdded {
                path,
                method,
                field,
                field_type,
            } => {
                write!(
                    f,
                    "Endpoint {path} {method}: field '{field}' added (type: {field_type})"
                )
            }
            ChangeRecord::FieldRemoved {
                path,
                method,
                field,
                field_type,
            } => {
                write!(
                    f,
                    "Endpoint {path} {method}: field '{field}' removed (type: {field_type})"
                )
            }
            ChangeRecord::FieldTypeChanged {
                path,
                method,
                field,
                old_type,
                new_type,
            } => {
                write!(
                    f,
                    "Endpoint {path} {method}: field '{field}' type changed from {old_type} to {new_type}"
                )
            }
        }
    }
}
