use crate::error::UnknownCombinator;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the children of a group are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    #[default]
    And,
    Or,
}

/// An entry for the combinator selector, e.g. `{ name: "and", label: "AND" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinatorOption {
    pub name: &'static str,
    pub label: &'static str,
}

impl Combinator {
    pub const ALL: [Combinator; 2] = [Combinator::And, Combinator::Or];

    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }

    /// The options offered by the combinator selector, in display order.
    pub fn options() -> Vec<CombinatorOption> {
        Self::ALL
            .iter()
            .map(|c| CombinatorOption {
                name: c.as_str(),
                label: c.label(),
            })
            .collect()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = UnknownCombinator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(Combinator::And),
            "or" => Ok(Combinator::Or),
            _ => Err(UnknownCombinator(s.to_string())),
        }
    }
}

/// Accepts a missing, `null` or unrecognised combinator as `None` instead of
/// failing the whole document.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<Combinator>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|token| match token.parse() {
        Ok(combinator) => Some(combinator),
        Err(err) => {
            tracing::warn!(%err, "Ignoring combinator, falling back to 'and'");
            None
        }
    }))
}

/// Like [`lenient`], but substitutes the default combinator.
pub(crate) fn lenient_or_default<'de, D>(deserializer: D) -> Result<Combinator, D::Error>
where
    D: Deserializer<'de>,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}
