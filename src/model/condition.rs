use super::combinator::{self, Combinator};
use super::rule_group::null_as_empty;
use crate::column::ColumnType;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A node of the interchange ("condition model") tree.
///
/// On the wire a nested node is a group when it carries a `rules` key and a
/// leaf otherwise. A root node is read with [`deserialize_root`], which also
/// accepts a group without `rules`. In memory the two cases are distinct
/// variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConditionNode {
    Group(ConditionGroup),
    Leaf(ConditionLeaf),
}

/// `{ condition, rules }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroup {
    #[serde(
        default,
        deserialize_with = "combinator::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub condition: Option<Combinator>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rules: Vec<ConditionNode>,
}

/// `{ field, operator, value }`, plus `label` and `type` once exported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionLeaf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ColumnType>,
    #[serde(default)]
    pub value: Value,
}

impl ConditionNode {
    pub fn group(condition: Combinator, rules: Vec<ConditionNode>) -> Self {
        ConditionNode::Group(ConditionGroup {
            condition: Some(condition),
            rules,
        })
    }

    pub fn leaf(field: &str, operator: &str, value: Value) -> Self {
        ConditionNode::Leaf(ConditionLeaf {
            field: Some(field.to_string()),
            operator: Some(operator.to_string()),
            value,
            ..Default::default()
        })
    }

    /// Parses a whole condition tree. The top-level object follows the root
    /// rules of [`deserialize_root`].
    pub fn from_json(json: &str) -> Result<Self, crate::error::LoadError> {
        let mut de = serde_json::Deserializer::from_str(json);
        deserialize_root(&mut de)
            .and_then(|node| de.end().map(|()| node))
            .map_err(|e| crate::error::LoadError::json("condition tree", e))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ConditionNode::Group(_))
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        match self {
            ConditionNode::Group(group) => {
                1 + group.rules.iter().map(ConditionNode::node_count).sum::<usize>()
            }
            ConditionNode::Leaf(_) => 1,
        }
    }
}

const LEAF_KEYS: [&str; 3] = ["field", "operator", "value"];

fn into_node<E: de::Error>(raw: Map<String, Value>, group: bool) -> Result<ConditionNode, E> {
    if group {
        serde_json::from_value(Value::Object(raw))
            .map(ConditionNode::Group)
            .map_err(de::Error::custom)
    } else {
        serde_json::from_value(Value::Object(raw))
            .map(ConditionNode::Leaf)
            .map_err(de::Error::custom)
    }
}

/// Reads the top-level node of a condition tree.
///
/// The root is a group when it has `rules` or `condition`, or when it has
/// none of the leaf keys (`field`, `operator`, `value`). So `{"condition":
/// "or"}` and `{}` are empty groups, while `{"field": ..}` is still a leaf.
pub fn deserialize_root<'de, D>(deserializer: D) -> Result<ConditionNode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Map::<String, Value>::deserialize(deserializer)?;
    let group = raw.contains_key("rules")
        || raw.contains_key("condition")
        || !LEAF_KEYS.iter().any(|key| raw.contains_key(*key));
    into_node(raw, group)
}

impl<'de> Deserialize<'de> for ConditionNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let group = raw.contains_key("rules");
        into_node(raw, group)
    }
}
