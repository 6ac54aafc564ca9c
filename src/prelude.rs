//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! rulebridge crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use rulebridge::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let columns = ColumnIndex::from_json(&std::fs::read_to_string("path/to/columns.json")?)?;
//! let conditions = ConditionNode::from_json(&std::fs::read_to_string("path/to/import.json")?)?;
//!
//! let query = Importer::new(&columns).import(&conditions);
//! let session = QuerySession::new(columns, Some(query));
//!
//! println!("{}", DebugFormatter::report(&session)?);
//! # Ok(())
//! # }
//! ```

// Column configuration
pub use crate::column::{
    ColumnDefinition, ColumnIndex, ColumnType, FieldDefinition, OperatorOption,
};

// Tree models
pub use crate::model::{
    Combinator, ConditionGroup, ConditionLeaf, ConditionNode, Rule, RuleGroup, RuleGroupNode,
};

// Import, validation and export
pub use crate::export::to_condition_model;
pub use crate::import::{
    IdGenerator, Importer, OperatorCheck, OperatorNormalizer, RandomIdGenerator,
    SequentialIdGenerator, normalize_operator,
};
pub use crate::validation::{ValidationMap, ValidationResult, render_errors, validate};

// Host state and debug views
pub use crate::data::SampleData;
pub use crate::session::QuerySession;
pub use crate::view::DebugFormatter;

// Error types
pub use crate::error::{LoadError, RenderError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
