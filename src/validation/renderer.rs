use super::map::{ValidationMap, ValidationResult};
use crate::column::ColumnIndex;
use crate::model::RuleGroupNode;
use itertools::Itertools;

/// Renders one `Field "<label>": <reasons>` line per invalid rule, in tree order.
///
/// Rules without an id or field are skipped, and groups contribute only
/// through their descendants.
pub fn render_errors(
    rules: &[RuleGroupNode],
    validation: &ValidationMap,
    columns: &ColumnIndex,
) -> Vec<String> {
    let mut errors = Vec::new();
    render_into(rules, validation, columns, &mut errors);
    errors
}

fn render_into(
    rules: &[RuleGroupNode],
    validation: &ValidationMap,
    columns: &ColumnIndex,
    errors: &mut Vec<String>,
) {
    for node in rules {
        match node {
            RuleGroupNode::Group(group) => render_into(&group.rules, validation, columns, errors),
            RuleGroupNode::Rule(rule) if !rule.id.is_empty() && !rule.field.is_empty() => {
                if let Some(ValidationResult::Invalid { reasons }) = validation.get(&rule.id) {
                    errors.push(format!(
                        "Field \"{}\": {}",
                        columns.label_for(&rule.field),
                        reasons.iter().join(", ")
                    ));
                }
            }
            RuleGroupNode::Rule(_) => {}
        }
    }
}
