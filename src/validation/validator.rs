use super::map::{ValidationMap, ValidationResult};
use crate::model::{Rule, RuleGroup, RuleGroupNode, is_blank};

pub const EMPTY_VALUE_REASON: &str = "Value cannot be empty";

/// Validates every node of `tree`, depth-first.
///
/// Groups are recorded as valid regardless of their children, so a group
/// holding only invalid rules is itself reported valid. Nodes without an id
/// are walked but not recorded.
pub fn validate(tree: &RuleGroup) -> ValidationMap {
    let mut map = ValidationMap::new();
    validate_group(tree, &mut map);
    map
}

fn validate_group(group: &RuleGroup, map: &mut ValidationMap) {
    if !group.id.is_empty() {
        map.insert(group.id.as_str(), ValidationResult::Valid);
    }
    for node in &group.rules {
        match node {
            RuleGroupNode::Group(child) => validate_group(child, map),
            RuleGroupNode::Rule(rule) if !rule.id.is_empty() => {
                map.insert(rule.id.as_str(), validate_rule(rule));
            }
            RuleGroupNode::Rule(_) => {}
        }
    }
}

/// A rule is invalid when its value is falsy or a blank string. Note that `0`
/// and `false` are falsy.
pub fn validate_rule(rule: &Rule) -> ValidationResult {
    if is_blank(&rule.value) {
        ValidationResult::invalid(EMPTY_VALUE_REASON)
    } else {
        ValidationResult::Valid
    }
}
