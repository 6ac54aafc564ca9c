use rand::Rng;

/// Source of node identifiers for imported trees.
pub trait IdGenerator: Send {
    /// Returns the next identifier. Values should not repeat within one tree.
    fn next_id(&mut self) -> String;
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces ids like `rule-k3j9x0a`: a prefix plus seven random base-36 characters.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    prefix: String,
    len: usize,
}

impl RandomIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            len: 7,
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new("rule-")
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        let mut rng = rand::rng();
        let suffix: String = (0..self.len)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        format!("{}{}", self.prefix, suffix)
    }
}

/// Deterministic ids `prefix1`, `prefix2`, ... for tests and reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
