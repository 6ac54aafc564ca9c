use crate::column::ColumnIndex;
use ahash::AHashMap;

/// Which part of a column's operator list a normalized label is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorCheck {
    /// Compare against the canonical `value` tokens (`"greaterthan"`).
    ///
    /// Normalization yields display labels (`"greater than"`), so with the
    /// usual column tables only operators whose label equals their token
    /// (`"between"`) survive. Existing imports depend on this.
    #[default]
    CanonicalValue,
    /// Compare against the display `key` labels.
    DisplayLabel,
}

/// Defines the built-in legacy operator table and its registration.
macro_rules! define_operator_aliases {
    ( $( ($legacy:expr, $label:expr) ),* $(,)? ) => {
        pub(crate) fn register_default_aliases(aliases: &mut AHashMap<String, String>) {
            $( aliases.insert($legacy.to_string(), $label.to_string()); )*
        }

        /// Looks up the display label for a legacy operator token.
        pub fn default_alias(token: &str) -> Option<&'static str> {
            match token {
                $( $legacy => Some($label), )*
                _ => None,
            }
        }
    };
}

define_operator_aliases! {
    ("equal", "is"),
    ("notequal", "is not"),
    ("greaterthan", "greater than"),
    ("lessthan", "less than"),
    ("between", "between"),
    ("notbetween", "not between"),
    ("isin", "is"),
    ("isnotin", "is not"),
}

/// Maps legacy operator tokens onto the vocabulary declared per column.
#[derive(Debug, Clone)]
pub struct OperatorNormalizer {
    aliases: AHashMap<String, String>,
    check: OperatorCheck,
}

impl Default for OperatorNormalizer {
    fn default() -> Self {
        let mut aliases = AHashMap::new();
        register_default_aliases(&mut aliases);
        Self {
            aliases,
            check: OperatorCheck::default(),
        }
    }
}

impl OperatorNormalizer {
    pub fn new(check: OperatorCheck) -> Self {
        Self {
            check,
            ..Self::default()
        }
    }

    pub fn check(&self) -> OperatorCheck {
        self.check
    }

    pub(crate) fn set_check(&mut self, check: OperatorCheck) {
        self.check = check;
    }

    pub(crate) fn insert_alias(&mut self, legacy: &str, label: &str) {
        self.aliases.insert(legacy.to_string(), label.to_string());
    }

    /// Maps a token through the alias table; unknown tokens pass through.
    pub fn alias<'a>(&'a self, operator: &'a str) -> &'a str {
        self.aliases.get(operator).map_or(operator, String::as_str)
    }

    /// Normalizes `operator` for `field`.
    ///
    /// Unknown fields return the operator untouched. Otherwise the result is
    /// the mapped label if the column accepts it, or `""` meaning "no valid
    /// operator selected".
    pub fn normalize(&self, field: &str, operator: &str, columns: &ColumnIndex) -> String {
        let Some(column) = columns.get(field) else {
            tracing::warn!(field, operator, "Field not found in column table");
            return operator.to_string();
        };

        let mapped = self.alias(operator);
        let accepted = match self.check {
            OperatorCheck::CanonicalValue => column.operator_values().any(|v| v == mapped),
            OperatorCheck::DisplayLabel => column.operator_keys().any(|k| k == mapped),
        };

        if accepted {
            mapped.to_string()
        } else {
            String::new()
        }
    }
}

/// Normalizes with the default alias table and [`OperatorCheck::CanonicalValue`].
pub fn normalize_operator(field: &str, operator: &str, columns: &ColumnIndex) -> String {
    OperatorNormalizer::default().normalize(field, operator, columns)
}
