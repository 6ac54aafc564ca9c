//! Tests for per-node validation and error rendering.
mod common;
use common::*;
use rulebridge::prelude::*;
use rulebridge::validation::EMPTY_VALUE_REASON;
use serde_json::json;

#[test]
fn test_validate_mixed_query() {
    let map = validate(&mixed_query());

    assert_eq!(map.len(), 5);
    assert_eq!(map.get("g1"), Some(&ValidationResult::Valid));
    assert_eq!(map.get("r1"), Some(&ValidationResult::Valid));
    assert_eq!(
        map.get("r2"),
        Some(&ValidationResult::invalid(EMPTY_VALUE_REASON))
    );
    // The group is valid even though its only rule is not.
    assert_eq!(map.get("g2"), Some(&ValidationResult::Valid));
    assert_eq!(
        map.get("r3"),
        Some(&ValidationResult::invalid(EMPTY_VALUE_REASON))
    );
    assert_eq!(map.invalid_ids(), vec!["r2", "r3"]);
    assert!(!map.all_valid());
}

#[test]
fn test_validate_falsy_values() {
    let query = group(
        "g",
        Combinator::And,
        vec![
            rule("zero", "employeeId", "is", json!(0)),
            rule("false", "employeeId", "is", json!(false)),
            rule("null", "employeeId", "is", json!(null)),
            rule("array", "employeeId", "is", json!([])),
            rule("text", "employeeId", "is", json!(" 7 ")),
        ],
    );
    let map = validate(&query);

    assert!(!map.get("zero").unwrap().is_valid());
    assert!(!map.get("false").unwrap().is_valid());
    assert!(!map.get("null").unwrap().is_valid());
    assert!(map.get("array").unwrap().is_valid());
    assert!(map.get("text").unwrap().is_valid());
}

#[test]
fn test_validate_tolerates_missing_rules() {
    let query = RuleGroup::from_json(r#"{ "combinator": "or" }"#).expect("Failed to parse");
    assert!(query.rules.is_empty());
    assert!(validate(&query).is_empty());

    assert!(validate(&RuleGroup::empty()).is_empty());
}

#[test]
fn test_validate_records_root_id_without_rules() {
    let query = RuleGroup::from_json(r#"{ "id": "g", "combinator": "or" }"#).unwrap();
    let map = validate(&query);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("g"), Some(&ValidationResult::Valid));
    assert!(map.all_valid());
}

#[test]
fn test_validate_tolerates_null_rules() {
    let query = RuleGroup::from_json(r#"{ "id": "g", "combinator": "and", "rules": null }"#)
        .expect("Failed to parse");
    assert!(query.rules.is_empty());
    assert_eq!(validate(&query).len(), 1);

    let nested = RuleGroup::from_json(
        r#"{ "id": "g", "rules": [ { "id": "h", "combinator": "or", "rules": null } ] }"#,
    )
    .unwrap();
    assert_eq!(nested.node_ids(), vec!["g", "h"]);
}

#[test]
fn test_validate_skips_nodes_without_id() {
    let query = RuleGroup::from_json(
        r#"{ "combinator": "and", "rules": [ { "field": "employeeId", "value": "" }, { "id": "x", "field": "employeeId", "value": 1 } ] }"#,
    )
    .unwrap();
    let map = validate(&query);
    assert_eq!(map.len(), 1);
    assert!(map.contains("x"));
}

#[test]
fn test_validate_is_idempotent() {
    let query = mixed_query();
    assert_eq!(validate(&query), validate(&query));
}

#[test]
fn test_prune_drops_orphaned_entries() {
    let mut query = mixed_query();
    let mut map = validate(&query);

    query.rules.truncate(1);
    map.prune(&query);

    assert_eq!(map.len(), 2);
    assert!(map.contains("g1"));
    assert!(map.contains("r1"));
    assert!(!map.contains("r3"));
}

#[test]
fn test_render_errors_in_tree_order() {
    let columns = demo_columns();
    let query = mixed_query();
    let errors = render_errors(&query.rules, &validate(&query), &columns);

    assert_eq!(
        errors,
        vec![
            "Field \"User Tag\": Value cannot be empty".to_string(),
            "Field \"Sensitivity Level\": Value cannot be empty".to_string(),
        ]
    );
}

#[test]
fn test_render_errors_label_lookup() {
    let columns = demo_columns();
    let rules = vec![
        rule("r1", "employeeId", "", json!(null)),
        rule("r2", "salary", "", json!(null)),
    ];
    let mut map = ValidationMap::new();
    map.insert("r1", ValidationResult::invalid(EMPTY_VALUE_REASON));
    map.insert(
        "r2",
        ValidationResult::Invalid {
            reasons: vec!["Too low".to_string(), "Not a number".to_string()],
        },
    );

    assert_eq!(
        render_errors(&rules, &map, &columns),
        vec![
            "Field \"User\": Value cannot be empty".to_string(),
            "Field \"salary\": Too low, Not a number".to_string(),
        ]
    );
}

#[test]
fn test_render_errors_skips_rules_without_field_or_entry() {
    let columns = demo_columns();
    let rules = vec![
        rule("r1", "", "", json!(null)),
        rule("r2", "employeeId", "", json!(null)),
    ];
    let mut map = ValidationMap::new();
    map.insert("r1", ValidationResult::invalid(EMPTY_VALUE_REASON));

    assert!(render_errors(&rules, &map, &columns).is_empty());
}
