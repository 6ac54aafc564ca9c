use super::definition::{ColumnDefinition, ColumnType};
use super::field::FieldDefinition;
use crate::error::LoadError;
use ahash::AHashMap;

/// Field-key lookup over a column table, built once per table.
///
/// Column order is preserved. When two columns share a field key the first
/// one wins.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    columns: Vec<ColumnDefinition>,
    by_field: AHashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new(columns: Vec<ColumnDefinition>) -> Self {
        let mut by_field = AHashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if by_field.contains_key(&column.field) {
                tracing::warn!(field = %column.field, "Duplicate column definition ignored");
                continue;
            }
            by_field.insert(column.field.clone(), idx);
        }
        Self { columns, by_field }
    }

    /// Parses a JSON array of column definitions.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let columns: Vec<ColumnDefinition> =
            serde_json::from_str(json).map_err(|e| LoadError::json("column table", e))?;
        Ok(Self::new(columns))
    }

    pub fn get(&self, field: &str) -> Option<&ColumnDefinition> {
        self.by_field.get(field).map(|&idx| &self.columns[idx])
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Widget field descriptors, one per distinct column, in table order.
    pub fn fields(&self) -> Vec<FieldDefinition> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(idx, column)| self.by_field.get(&column.field) == Some(idx))
            .map(|(_, column)| FieldDefinition::from(column))
            .collect()
    }

    /// The column's label, or the field key itself for unknown fields.
    pub fn label_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.get(field).map_or(field, ColumnDefinition::display_label)
    }

    /// The column's declared type, `string` for unknown fields.
    pub fn type_for(&self, field: &str) -> ColumnType {
        self.get(field).map(|c| c.column_type).unwrap_or_default()
    }
}

impl FromIterator<ColumnDefinition> for ColumnIndex {
    fn from_iter<I: IntoIterator<Item = ColumnDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
