pub mod formatter;

pub use formatter::DebugFormatter;
