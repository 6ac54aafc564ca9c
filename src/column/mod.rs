pub mod definition;
pub mod field;
pub mod index;

pub use definition::*;
pub use field::*;
pub use index::*;
