//! Common test utilities: the demo column table and small tree builders.
use rulebridge::prelude::*;
use serde_json::{Value, json};

/// The demo column table (employeeId, employeeTagId, sensitivityLevel).
#[allow(dead_code)]
pub fn demo_columns() -> ColumnIndex {
    ColumnIndex::new(SampleData::demo_columns())
}

/// `employeeId equal 123 AND (sensitivityLevel greaterthan 5)`
#[allow(dead_code)]
pub fn demo_import() -> ConditionNode {
    SampleData::demo_import()
}

/// An importer that hands out `rule-1`, `rule-2`, ... in visiting order.
#[allow(dead_code)]
pub fn sequential_importer(columns: &ColumnIndex) -> Importer<'_> {
    Importer::builder(columns)
        .with_id_generator(SequentialIdGenerator::new("rule-"))
        .build()
}

#[allow(dead_code)]
pub fn rule(id: &str, field: &str, operator: &str, value: Value) -> RuleGroupNode {
    Rule::new(id, field, operator, value).into()
}

#[allow(dead_code)]
pub fn group(id: &str, combinator: Combinator, rules: Vec<RuleGroupNode>) -> RuleGroup {
    RuleGroup::new(id, combinator, rules)
}

/// A query with one valid rule, one empty rule and a nested group holding a
/// blank rule.
///
/// ```text
/// g1 (and)
/// ├── r1 employeeId = 123
/// ├── r2 employeeTagId = ""
/// └── g2 (or)
///     └── r3 sensitivityLevel = "   "
/// ```
#[allow(dead_code)]
pub fn mixed_query() -> RuleGroup {
    group(
        "g1",
        Combinator::And,
        vec![
            rule("r1", "employeeId", "is", json!(123)),
            rule("r2", "employeeTagId", "is", json!("")),
            group(
                "g2",
                Combinator::Or,
                vec![rule("r3", "sensitivityLevel", "greater than", json!("   "))],
            )
            .into(),
        ],
    )
}
