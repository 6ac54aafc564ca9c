use crate::column::{ColumnIndex, FieldDefinition};
use crate::export::to_condition_model;
use crate::model::{ConditionGroup, RuleGroup};
use crate::validation::{ValidationMap, render_errors, validate};

/// The state a query builder host keeps between edits.
///
/// Every [`replace`](QuerySession::replace) swaps in the whole tree and
/// recomputes the validation map and condition model from scratch.
#[derive(Debug, Clone)]
pub struct QuerySession {
    columns: ColumnIndex,
    fields: Vec<FieldDefinition>,
    query: RuleGroup,
    validation: ValidationMap,
    condition_model: ConditionGroup,
}

impl QuerySession {
    /// Starts a session, using the empty `and` group when no initial query is given.
    pub fn new(columns: ColumnIndex, initial: Option<RuleGroup>) -> Self {
        let fields = columns.fields();
        let query = initial.unwrap_or_else(RuleGroup::empty);
        let validation = validate(&query);
        let condition_model = to_condition_model(&query, &columns);
        Self {
            columns,
            fields,
            query,
            validation,
            condition_model,
        }
    }

    /// Replaces the current query after a user edit.
    pub fn replace(&mut self, query: RuleGroup) {
        self.validation = validate(&query);
        self.condition_model = to_condition_model(&query, &self.columns);
        self.query = query;
        tracing::debug!(
            nodes = self.validation.len(),
            invalid = self.validation.invalid_ids().len(),
            "Recomputed validation and condition model"
        );
    }

    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn query(&self) -> &RuleGroup {
        &self.query
    }

    pub fn validation(&self) -> &ValidationMap {
        &self.validation
    }

    pub fn condition_model(&self) -> &ConditionGroup {
        &self.condition_model
    }

    /// Human-readable validation errors for the current query.
    pub fn errors(&self) -> Vec<String> {
        render_errors(&self.query.rules, &self.validation, &self.columns)
    }

    pub fn is_valid(&self) -> bool {
        self.validation.all_valid()
    }
}
