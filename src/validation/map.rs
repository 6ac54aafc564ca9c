use crate::model::RuleGroup;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Outcome of validating a single node.
///
/// Serializes as `true` when valid and `{ "valid": false, "reasons": [...] }`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawResult", into = "RawResult")]
pub enum ValidationResult {
    Valid,
    Invalid { reasons: Vec<String> },
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawResult {
    Flag(bool),
    Detailed {
        valid: bool,
        #[serde(default)]
        reasons: Vec<String>,
    },
}

impl From<RawResult> for ValidationResult {
    fn from(raw: RawResult) -> Self {
        match raw {
            RawResult::Flag(true) | RawResult::Detailed { valid: true, .. } => {
                ValidationResult::Valid
            }
            RawResult::Flag(false) => ValidationResult::Invalid {
                reasons: Vec::new(),
            },
            RawResult::Detailed { reasons, .. } => ValidationResult::Invalid { reasons },
        }
    }
}

impl From<ValidationResult> for RawResult {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid => RawResult::Flag(true),
            ValidationResult::Invalid { reasons } => RawResult::Detailed {
                valid: false,
                reasons,
            },
        }
    }
}

impl ValidationResult {
    pub fn invalid(reason: &str) -> Self {
        ValidationResult::Invalid {
            reasons: vec![reason.to_string()],
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid { reasons } => reasons,
        }
    }
}

/// Validation outcome per node id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationMap {
    entries: AHashMap<String, ValidationResult>,
}

impl ValidationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, result: ValidationResult) {
        self.entries.insert(id.into(), result);
    }

    pub fn get(&self, id: &str) -> Option<&ValidationResult> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.entries.iter().map(|(id, result)| (id.as_str(), result))
    }

    /// Ids of invalid nodes, sorted for stable output.
    pub fn invalid_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn all_valid(&self) -> bool {
        self.entries.values().all(ValidationResult::is_valid)
    }

    /// Drops entries for ids that no longer occur in `tree`.
    pub fn prune(&mut self, tree: &RuleGroup) {
        let live: AHashSet<&str> = tree.node_ids().into_iter().collect();
        self.entries.retain(|id, _| live.contains(id.as_str()));
    }
}
