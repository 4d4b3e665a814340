use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// SpecDocument - the parsed form of a simplified REST API specification
///
/// A spec document describes an API as a tree: path -> HTTP method ->
/// method descriptor. Every optional level defaults to an empty mapping on
/// deserialization, preserving the "missing nested key means no
/// methods/fields" semantics of the source format.
///
/// Collections use `BTreeMap` so that iteration order (and therefore diff
/// output order) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecDocument {
    /// Optional spec version label (informational; ignored by the diff)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Path string (e.g. `/widget`) to its per-method descriptors
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
}

/// Per-path mapping from HTTP method name (e.g. `GET`) to its descriptor.
pub type PathItem = BTreeMap<String, MethodDescriptor>;

/// MethodDescriptor - the per-HTTP-method object under a path
///
/// Holds an optional response descriptor. Unknown sibling keys in the source
/// JSON are ignored so that forward-compatible spec evolutions still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Optional response description for this method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseDescriptor>,
}

/// ResponseDescriptor - the response shape declared for a method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    /// Expected HTTP status (informational; ignored by the diff)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Flat field-name to type-tag schema
    ///
    /// Type tags are free-form strings (`"string"`, `"number"`, `"boolean"`
    /// by convention) and are compared opaquely, never validated against a
    /// closed set.
    #[serde(default)]
    pub schema: BTreeMap<String, String>,
}

static EMPTY_SCHEMA: BTreeMap<String, String> = BTreeMap::new();

impl MethodDescriptor {
    /// The response schema for this method, defaulting to an empty mapping
    /// when `response` or `response.schema` is absent.
    pub fn response_schema(&self) -> &BTreeMap<String, String> {
        match &self.response {
            Some(response) => &response.schema,
            None => &EMPTY_SCHEMA,
        }
    }
}
