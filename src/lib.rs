//! # rulebridge - Query Builder Rule Trees
//!
//! **rulebridge** converts filter expressions between two tree shapes: the
//! interchange *condition model* (`{ condition, rules }` groups and
//! `{ field, operator, value }` leaves) and the *rule group* model a visual
//! query builder edits (`{ id, combinator, rules }`). It also validates rule
//! groups per node and renders the failures for display.
//!
//! ## Core Workflow
//!
//! 1.  **Describe Your Columns**: Load the column table (field key, label,
//!     category, type and operator vocabulary) into a `ColumnIndex`.
//! 2.  **Import**: Use `Importer::builder` to convert a condition tree into a
//!     `RuleGroup`. Every node gets a fresh id and legacy operator tokens are
//!     normalized against the column's vocabulary.
//! 3.  **Edit & Validate**: Hand the tree to a `QuerySession`. Each time the
//!     host replaces the tree, the validation map and exported condition
//!     model are recomputed.
//! 4.  **Export**: Read the condition model back, annotated with column
//!     labels and types.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulebridge::prelude::*;
//! use serde_json::json;
//!
//! let columns = ColumnIndex::new(vec![
//!     ColumnDefinition::new("sensitivityLevel", "Sensitivity Level", "Data Related", ColumnType::Number)
//!         .with_operator("greater than", "greaterthan")
//!         .with_operator("between", "between"),
//! ]);
//!
//! let conditions = ConditionNode::group(
//!     Combinator::Or,
//!     vec![ConditionNode::leaf("sensitivityLevel", "between", json!(""))],
//! );
//!
//! let mut importer = Importer::builder(&columns)
//!     .with_id_generator(SequentialIdGenerator::new("rule-"))
//!     .build();
//! let query = importer.import(&conditions);
//!
//! let session = QuerySession::new(columns, Some(query));
//! assert_eq!(
//!     session.errors(),
//!     vec!["Field \"Sensitivity Level\": Value cannot be empty".to_string()]
//! );
//! ```

pub mod column;
pub mod data;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod prelude;
pub mod session;
pub mod validation;
pub mod view;
