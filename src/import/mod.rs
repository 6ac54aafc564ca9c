use crate::column::ColumnIndex;
use crate::model::{
    Combinator, ConditionGroup, ConditionLeaf, ConditionNode, Rule, RuleGroup, RuleGroupNode,
    or_null,
};
use ahash::AHashSet;

pub mod id;
pub mod normalizer;

pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use normalizer::{OperatorCheck, OperatorNormalizer, default_alias, normalize_operator};

/// Attempts at drawing a fresh id before falling back to a counter suffix.
const MAX_ID_ATTEMPTS: usize = 16;

/// Converts interchange condition trees into the query builder's rule groups.
pub struct Importer<'a> {
    columns: &'a ColumnIndex,
    normalizer: OperatorNormalizer,
    ids: Box<dyn IdGenerator>,
    issued: AHashSet<String>,
}

pub struct ImporterBuilder<'a> {
    columns: &'a ColumnIndex,
    normalizer: OperatorNormalizer,
    ids: Option<Box<dyn IdGenerator>>,
}

impl<'a> ImporterBuilder<'a> {
    pub fn new(columns: &'a ColumnIndex) -> Self {
        Self {
            columns,
            normalizer: OperatorNormalizer::default(),
            ids: None,
        }
    }

    /// Adds or overrides a legacy operator token, e.g. `("eq", "is")`.
    pub fn with_operator_alias(mut self, legacy: &str, label: &str) -> Self {
        self.normalizer.insert_alias(legacy, label);
        self
    }

    pub fn with_operator_check(mut self, check: OperatorCheck) -> Self {
        self.normalizer.set_check(check);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn build(self) -> Importer<'a> {
        Importer {
            columns: self.columns,
            normalizer: self.normalizer,
            ids: self
                .ids
                .unwrap_or_else(|| Box::new(RandomIdGenerator::default())),
            issued: AHashSet::new(),
        }
    }
}

impl<'a> Importer<'a> {
    pub fn builder(columns: &'a ColumnIndex) -> ImporterBuilder<'a> {
        ImporterBuilder::new(columns)
    }

    /// An importer with random ids and the default operator table.
    pub fn new(columns: &'a ColumnIndex) -> Self {
        ImporterBuilder::new(columns).build()
    }

    pub fn normalizer(&self) -> &OperatorNormalizer {
        &self.normalizer
    }

    /// Imports a whole tree. A bare leaf at the top is wrapped in an `and` group.
    pub fn import(&mut self, node: &ConditionNode) -> RuleGroup {
        self.issued.clear();
        match self.convert(node) {
            RuleGroupNode::Group(group) => group,
            rule @ RuleGroupNode::Rule(_) => {
                let id = self.fresh_id();
                RuleGroup::new(id, Combinator::And, vec![rule])
            }
        }
    }

    /// Converts one node and its descendants, depth-first in sibling order.
    pub fn convert(&mut self, node: &ConditionNode) -> RuleGroupNode {
        match node {
            ConditionNode::Group(group) => RuleGroupNode::Group(self.convert_group(group)),
            ConditionNode::Leaf(leaf) => RuleGroupNode::Rule(self.convert_leaf(leaf)),
        }
    }

    fn convert_group(&mut self, group: &ConditionGroup) -> RuleGroup {
        let id = self.fresh_id();
        let rules = group.rules.iter().map(|child| self.convert(child)).collect();
        RuleGroup::new(id, group.condition.unwrap_or_default(), rules)
    }

    fn convert_leaf(&mut self, leaf: &ConditionLeaf) -> Rule {
        let id = self.fresh_id();
        let field = leaf.field.clone().unwrap_or_default();
        let operator = self.normalizer.normalize(
            &field,
            leaf.operator.as_deref().unwrap_or_default(),
            self.columns,
        );
        Rule::new(id, field, operator, or_null(&leaf.value))
    }

    fn fresh_id(&mut self) -> String {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
        let base = self.ids.next_id();
        let mut n = self.issued.len();
        loop {
            let id = format!("{}-{}", base, n);
            if self.issued.insert(id.clone()) {
                return id;
            }
            n += 1;
        }
    }
}

/// Imports with random ids and the default operator table.
pub fn import_conditions(node: &ConditionNode, columns: &ColumnIndex) -> RuleGroup {
    Importer::new(columns).import(node)
}
