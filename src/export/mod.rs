//! Conversion of rule groups back into the interchange condition model.

use crate::column::ColumnIndex;
use crate::model::{ConditionGroup, ConditionLeaf, ConditionNode, Rule, RuleGroup, RuleGroupNode};

/// Converts a rule group into a condition group, annotating each leaf with the
/// label and type of its column (`field` and `string` when the column is unknown).
pub fn to_condition_model(tree: &RuleGroup, columns: &ColumnIndex) -> ConditionGroup {
    ConditionGroup {
        condition: Some(tree.combinator),
        rules: tree
            .rules
            .iter()
            .map(|node| export_node(node, columns))
            .collect(),
    }
}

/// Converts a single node and its descendants.
pub fn export_node(node: &RuleGroupNode, columns: &ColumnIndex) -> ConditionNode {
    match node {
        RuleGroupNode::Group(group) => ConditionNode::Group(to_condition_model(group, columns)),
        RuleGroupNode::Rule(rule) => ConditionNode::Leaf(export_rule(rule, columns)),
    }
}

fn export_rule(rule: &Rule, columns: &ColumnIndex) -> ConditionLeaf {
    ConditionLeaf {
        field: Some(rule.field.clone()),
        label: Some(columns.label_for(&rule.field).to_string()),
        operator: Some(rule.operator.clone()),
        value_type: Some(columns.type_for(&rule.field)),
        value: rule.value.clone(),
    }
}
