use crate::column::{ColumnDefinition, ColumnIndex, ColumnType};
use crate::error::LoadError;
use crate::model::{Combinator, ConditionNode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;

/// A column table together with an initial condition tree to import.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SampleData {
    pub columns: Vec<ColumnDefinition>,
    #[serde(deserialize_with = "crate::model::condition::deserialize_root")]
    pub import: ConditionNode,
}

impl SampleData {
    /// Load sample data from a JSON file of the form `{ "columns": [...], "import": {...} }`.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = read_file(path)?;
        serde_json::from_str(&content).map_err(|e| LoadError::json("sample data", e))
    }

    pub fn column_index(&self) -> ColumnIndex {
        ColumnIndex::new(self.columns.clone())
    }

    /// The demonstration column table: employee and data-sensitivity filters.
    pub fn demo_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("employeeId", "User", "Employee Related", ColumnType::Number)
                .with_operator("is", "isin")
                .with_operator("is not", "isnotin"),
            ColumnDefinition::new(
                "employeeTagId",
                "User Tag",
                "Employee Related",
                ColumnType::Number,
            )
            .with_operator("is", "isin")
            .with_operator("is not", "isnotin")
            .with_operator("greater than", "greaterthan")
            .with_operator("less than", "lessthan")
            .with_operator("between", "between")
            .with_operator("not between", "notbetween"),
            ColumnDefinition::new(
                "sensitivityLevel",
                "Sensitivity Level",
                "Data Related",
                ColumnType::Number,
            )
            .with_operator("is", "isin")
            .with_operator("is not", "isnotin")
            .with_operator("greater than", "greaterthan")
            .with_operator("less than", "lessthan"),
        ]
    }

    /// `employeeId equal 123 AND (sensitivityLevel greaterthan 5)`
    pub fn demo_import() -> ConditionNode {
        ConditionNode::group(
            Combinator::And,
            vec![
                ConditionNode::leaf("employeeId", "equal", json!(123)),
                ConditionNode::group(
                    Combinator::Or,
                    vec![ConditionNode::leaf(
                        "sensitivityLevel",
                        "greaterthan",
                        json!(5),
                    )],
                ),
            ],
        )
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self {
            columns: Self::demo_columns(),
            import: Self::demo_import(),
        }
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })
}
