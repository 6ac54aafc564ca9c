use thiserror::Error;

/// Errors that can occur while loading column tables, condition trees or
/// rule groups from their JSON representation.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("Failed to parse {document} JSON: {message}")]
    JsonParse {
        document: &'static str,
        message: String,
    },

    #[error("Could not read file '{path}': {message}")]
    Io { path: String, message: String },
}

impl LoadError {
    pub(crate) fn json(document: &'static str, err: serde_json::Error) -> Self {
        LoadError::JsonParse {
            document,
            message: err.to_string(),
        }
    }
}

/// Errors that can occur while rendering a debug view.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("Failed to serialize {view}: {message}")]
    Serialize { view: &'static str, message: String },
}

/// Returned when a combinator token is neither `and` nor `or`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown combinator '{0}', expected 'and' or 'or'")]
pub struct UnknownCombinator(pub String);
