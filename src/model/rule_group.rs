use super::combinator::{self, Combinator};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A node of the query builder's canonical tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleGroupNode {
    Group(RuleGroup),
    Rule(Rule),
}

/// A group of rules joined by a combinator. The root of every query is one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "combinator::lenient_or_default")]
    pub combinator: Combinator,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rules: Vec<RuleGroupNode>,
}

/// A single `field operator value` rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub field: String,
    /// Empty when no valid operator is selected.
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

/// Reads an absent or `null` list as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RuleGroup {
    pub fn new(id: impl Into<String>, combinator: Combinator, rules: Vec<RuleGroupNode>) -> Self {
        Self {
            id: id.into(),
            combinator,
            rules,
        }
    }

    /// The empty query: `{ combinator: "and", rules: [] }`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collects the non-empty ids of this group and all of its descendants,
    /// depth-first in sibling order.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        if !self.id.is_empty() {
            ids.push(&self.id);
        }
        for node in &self.rules {
            match node {
                RuleGroupNode::Group(group) => group.collect_ids(ids),
                RuleGroupNode::Rule(rule) if !rule.id.is_empty() => ids.push(&rule.id),
                RuleGroupNode::Rule(_) => {}
            }
        }
    }

    /// Finds a rule anywhere in the tree by id.
    pub fn find_rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find_map(|node| match node {
            RuleGroupNode::Group(group) => group.find_rule(id),
            RuleGroupNode::Rule(rule) if rule.id == id => Some(rule),
            RuleGroupNode::Rule(_) => None,
        })
    }

    pub fn find_rule_mut(&mut self, id: &str) -> Option<&mut Rule> {
        self.rules.iter_mut().find_map(|node| match node {
            RuleGroupNode::Group(group) => group.find_rule_mut(id),
            RuleGroupNode::Rule(rule) if rule.id == id => Some(rule),
            RuleGroupNode::Rule(_) => None,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, crate::error::LoadError> {
        serde_json::from_str(json).map_err(|e| crate::error::LoadError::json("rule group", e))
    }
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        field: impl Into<String>,
        operator: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            id: id.into(),
            field: field.into(),
            operator: operator.into(),
            value,
        }
    }
}

impl RuleGroupNode {
    pub fn id(&self) -> &str {
        match self {
            RuleGroupNode::Group(group) => &group.id,
            RuleGroupNode::Rule(rule) => &rule.id,
        }
    }
}

impl From<RuleGroup> for RuleGroupNode {
    fn from(group: RuleGroup) -> Self {
        RuleGroupNode::Group(group)
    }
}

impl From<Rule> for RuleGroupNode {
    fn from(rule: Rule) -> Self {
        RuleGroupNode::Rule(rule)
    }
}

impl<'de> Deserialize<'de> for RuleGroupNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        if raw.contains_key("rules") {
            serde_json::from_value(Value::Object(raw))
                .map(RuleGroupNode::Group)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(Value::Object(raw))
                .map(RuleGroupNode::Rule)
                .map_err(de::Error::custom)
        }
    }
}
