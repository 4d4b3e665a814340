//! Spec diff engine scenario tests.
//!
//! Each test pins one observable behavior of the diff engine, asserting on
//! the rendered change lines where the exact output format matters.

use specdrift_core::{diff_spec_lines, diff_specs, ChangeRecord, SpecDocument};

fn spec(value: serde_json::Value) -> SpecDocument {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_endpoint_added_lists_its_methods() {
    // Scenario: a path appears in the new document
    // When: old has no paths, new has /widget with GET
    // Then: exactly one "Endpoint added" line naming the method
    let old = spec(serde_json::json!({ "paths": {} }));
    let new = spec(serde_json::json!({ "paths": { "/widget": { "GET": {} } } }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec!["Endpoint added: /widget ['GET']".to_string()]
    );
}

#[test]
fn test_field_added_on_common_endpoint() {
    // Scenario: a schema gains a field on a path+method present in both
    // Then: exactly one field-added record referencing /w GET
    let old = spec(serde_json::json!({
        "paths": { "/w": { "GET": { "response": { "schema": { "id": "string" } } } } }
    }));
    let new = spec(serde_json::json!({
        "paths": { "/w": { "GET": { "response": { "schema": {
            "id": "string",
            "amount": "number"
        } } } } }
    }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec!["Endpoint /w GET: field 'amount' added (type: number)".to_string()]
    );
}

#[test]
fn test_field_type_change_reports_old_and_new_tags() {
    let old = spec(serde_json::json!({
        "paths": { "/w": { "GET": { "response": { "schema": { "amount": "number" } } } } }
    }));
    let new = spec(serde_json::json!({
        "paths": { "/w": { "GET": { "response": { "schema": { "amount": "string" } } } } }
    }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec!["Endpoint /w GET: field 'amount' type changed from number to string".to_string()]
    );
}

#[test]
fn test_two_empty_specs_produce_empty_output() {
    let old = spec(serde_json::json!({ "paths": {} }));
    let new = spec(serde_json::json!({ "paths": {} }));

    assert!(diff_specs(&old, &new).is_empty());
}

#[test]
fn test_removed_endpoint_is_not_diffed_deeper() {
    // Scenario: /order removed entirely (GET and POST in old, absent in new)
    // Then: one "Endpoint removed" line listing both methods, and no
    //       method- or field-level records for /order
    let old = spec(serde_json::json!({
        "paths": { "/order": {
            "GET": { "response": { "schema": { "id": "string" } } },
            "POST": {}
        } }
    }));
    let new = spec(serde_json::json!({ "paths": {} }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec!["Endpoint removed: /order ['GET', 'POST']".to_string()]
    );
}

#[test]
fn test_added_paths_emit_in_sorted_order() {
    let old = spec(serde_json::json!({ "paths": {} }));
    let new = spec(serde_json::json!({
        "paths": { "/z": { "GET": {} }, "/a": { "GET": {} } }
    }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec![
            "Endpoint added: /a ['GET']".to_string(),
            "Endpoint added: /z ['GET']".to_string(),
        ]
    );
}

#[test]
fn test_endpoint_changes_precede_common_path_processing() {
    // Added/removed endpoints come first, then per-common-path records.
    let old = spec(serde_json::json!({
        "paths": {
            "/common": { "GET": {} },
            "/gone": { "GET": {} }
        }
    }));
    let new = spec(serde_json::json!({
        "paths": {
            "/common": { "GET": {}, "PUT": {} },
            "/fresh": { "POST": {} }
        }
    }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec![
            "Endpoint added: /fresh ['POST']".to_string(),
            "Endpoint removed: /gone ['GET']".to_string(),
            "Endpoint /common: method PUT added".to_string(),
        ]
    );
}

#[test]
fn test_missing_paths_key_is_an_empty_document() {
    let old = spec(serde_json::json!({}));
    let new = spec(serde_json::json!({ "paths": { "/w": { "GET": {} } } }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec!["Endpoint added: /w ['GET']".to_string()]
    );
}

#[test]
fn test_version_changes_are_not_reported() {
    let old = spec(serde_json::json!({ "version": "1.0.0", "paths": {} }));
    let new = spec(serde_json::json!({ "version": "2.0.0", "paths": {} }));

    assert!(diff_specs(&old, &new).is_empty());
}

#[test]
fn test_single_path_full_ordering() {
    // Per common method: fields added, fields removed, then type changes,
    // each sorted by field name.
    let old = spec(serde_json::json!({
        "paths": { "/w": { "GET": { "response": { "schema": {
            "b_removed": "string",
            "a_removed": "string",
            "changed": "number"
        } } } } }
    }));
    let new = spec(serde_json::json!({
        "paths": { "/w": { "GET": { "response": { "schema": {
            "z_added": "boolean",
            "a_added": "string",
            "changed": "string"
        } } } } }
    }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec![
            "Endpoint /w GET: field 'a_added' added (type: string)".to_string(),
            "Endpoint /w GET: field 'z_added' added (type: boolean)".to_string(),
            "Endpoint /w GET: field 'a_removed' removed (type: string)".to_string(),
            "Endpoint /w GET: field 'b_removed' removed (type: string)".to_string(),
            "Endpoint /w GET: field 'changed' type changed from number to string".to_string(),
        ]
    );
}

#[test]
fn test_field_changes_grouped_per_method_in_sorted_method_order() {
    let old = spec(serde_json::json!({
        "paths": { "/w": {
            "GET": { "response": { "schema": {} } },
            "POST": { "response": { "schema": {} } }
        } }
    }));
    let new = spec(serde_json::json!({
        "paths": { "/w": {
            "GET": { "response": { "schema": { "g": "string" } } },
            "POST": { "response": { "schema": { "p": "string" } } }
        } }
    }));

    assert_eq!(
        diff_spec_lines(&old, &new),
        vec![
            "Endpoint /w GET: field 'g' added (type: string)".to_string(),
            "Endpoint /w POST: field 'p' added (type: string)".to_string(),
        ]
    );
}

#[test]
fn test_scoping_no_field_records_for_added_path() {
    // A path only present in new contributes a single endpoint-level record,
    // even when its methods declare schemas.
    let old = spec(serde_json::json!({ "paths": {} }));
    let new = spec(serde_json::json!({
        "paths": { "/p": { "GET": { "response": { "schema": { "id": "string" } } } } }
    }));

    let changes = diff_specs(&old, &new);
    assert_eq!(changes.len(), 1);
    assert!(changes
        .iter()
        .filter(|c| c.path() == "/p")
        .all(ChangeRecord::is_endpoint_level));
}
