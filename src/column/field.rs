use super::definition::{ColumnDefinition, ColumnType};
use serde::Serialize;

/// Which value editor the query builder renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueEditorType {
    Checkbox,
    Text,
}

/// The HTML input type used by a text value editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Number,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOperator {
    pub name: String,
    pub label: String,
}

/// Field descriptor handed to the query builder widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    pub value_editor_type: ValueEditorType,
    pub input_type: InputType,
    pub operators: Vec<FieldOperator>,
    pub category: String,
}

impl From<&ColumnDefinition> for FieldDefinition {
    fn from(column: &ColumnDefinition) -> Self {
        let value_editor_type = match column.column_type {
            ColumnType::Boolean => ValueEditorType::Checkbox,
            _ => ValueEditorType::Text,
        };
        let input_type = match column.column_type {
            ColumnType::Number => InputType::Number,
            _ => InputType::Text,
        };

        // The widget keys operators by display label and shows the canonical token.
        let operators = column
            .operators
            .iter()
            .map(|op| FieldOperator {
                name: op.key.clone(),
                label: op.value.clone(),
            })
            .collect();

        Self {
            name: column.field.clone(),
            label: column.label.clone(),
            value_editor_type,
            input_type,
            operators,
            category: column.category.clone(),
        }
    }
}
