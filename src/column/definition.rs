use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared data type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    String,
    Number,
    Boolean,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable operator of a column: `key` is the display label shown to
/// the user (`"greater than"`), `value` the canonical token (`"greaterthan"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorOption {
    pub key: String,
    pub value: String,
}

/// A filterable column as configured by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub field: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    #[serde(default)]
    pub operators: Vec<OperatorOption>,
}

impl ColumnDefinition {
    pub fn new(field: &str, label: &str, category: &str, column_type: ColumnType) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            category: category.to_string(),
            column_type,
            operators: Vec::new(),
        }
    }

    pub fn with_operator(mut self, key: &str, value: &str) -> Self {
        self.operators.push(OperatorOption {
            key: key.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// The label to show for this column, falling back to the field key.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.field
        } else {
            &self.label
        }
    }

    pub fn operator_keys(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(|op| op.key.as_str())
    }

    pub fn operator_values(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(|op| op.value.as_str())
    }
}
