pub mod combinator;
pub mod condition;
pub mod rule_group;
pub mod value;

pub use combinator::{Combinator, CombinatorOption};
pub use condition::*;
pub use rule_group::*;
pub use value::*;
