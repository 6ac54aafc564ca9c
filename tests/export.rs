//! Tests for exporting rule groups back into the condition model.
mod common;
use common::*;
use rulebridge::export::export_node;
use rulebridge::prelude::*;
use serde_json::json;

#[test]
fn test_export_annotates_leaves() {
    let columns = demo_columns();
    let model = to_condition_model(&mixed_query(), &columns);

    let wire = serde_json::to_value(&model).unwrap();
    assert_eq!(
        wire,
        json!({
            "condition": "and",
            "rules": [
                { "field": "employeeId", "label": "User", "operator": "is", "type": "number", "value": 123 },
                { "field": "employeeTagId", "label": "User Tag", "operator": "is", "type": "number", "value": "" },
                {
                    "condition": "or",
                    "rules": [
                        { "field": "sensitivityLevel", "label": "Sensitivity Level", "operator": "greater than", "type": "number", "value": "   " }
                    ]
                }
            ]
        })
    );
}

#[test]
fn test_export_unknown_field_defaults() {
    let columns = demo_columns();
    let node = export_node(&rule("r1", "salary", "above", json!(10)), &columns);

    match node {
        ConditionNode::Leaf(leaf) => {
            assert_eq!(leaf.field.as_deref(), Some("salary"));
            assert_eq!(leaf.label.as_deref(), Some("salary"));
            assert_eq!(leaf.value_type, Some(ColumnType::String));
            assert_eq!(leaf.operator.as_deref(), Some("above"));
        }
        ConditionNode::Group(_) => panic!("Expected a leaf"),
    }
}

#[test]
fn test_export_empty_query() {
    let columns = demo_columns();
    let model = to_condition_model(&RuleGroup::empty(), &columns);
    assert_eq!(
        serde_json::to_value(&model).unwrap(),
        json!({ "condition": "and", "rules": [] })
    );
}

#[test]
fn test_export_does_not_touch_source() {
    let columns = demo_columns();
    let query = mixed_query();
    let before = query.clone();
    let _ = to_condition_model(&query, &columns);
    assert_eq!(query, before);
}

#[test]
fn test_import_then_export_round_trip() {
    let columns = demo_columns();
    let conditions = ConditionNode::group(
        Combinator::Or,
        vec![
            ConditionNode::leaf("employeeTagId", "between", json!([1, 9])),
            ConditionNode::group(
                Combinator::And,
                vec![ConditionNode::leaf("salary", "equal", json!("high"))],
            ),
        ],
    );
    let query = sequential_importer(&columns).import(&conditions);
    let exported = to_condition_model(&query, &columns);

    assert_eq!(exported.condition, Some(Combinator::Or));
    let ConditionNode::Leaf(first) = &exported.rules[0] else {
        panic!("Expected a leaf");
    };
    assert_eq!(first.field.as_deref(), Some("employeeTagId"));
    assert_eq!(first.operator.as_deref(), Some("between"));
    assert_eq!(first.value, json!([1, 9]));

    let ConditionNode::Group(nested) = &exported.rules[1] else {
        panic!("Expected a group");
    };
    assert_eq!(nested.condition, Some(Combinator::And));
    let ConditionNode::Leaf(salary) = &nested.rules[0] else {
        panic!("Expected a leaf");
    };
    assert_eq!(salary.operator.as_deref(), Some("equal"));
    assert_eq!(salary.label.as_deref(), Some("salary"));
}
