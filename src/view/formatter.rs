use crate::error::RenderError;
use crate::model::{ConditionGroup, RuleGroup};
use crate::session::QuerySession;
use itertools::Itertools;
use serde::Serialize;

/// Formats query state into the text shown in debug panels.
pub struct DebugFormatter;

impl DebugFormatter {
    /// The live rule group as indented JSON.
    pub fn query_model(query: &RuleGroup) -> Result<String, RenderError> {
        Self::pretty(query, "query model")
    }

    /// The exported condition model as indented JSON.
    pub fn condition_model(model: &ConditionGroup) -> Result<String, RenderError> {
        Self::pretty(model, "condition model")
    }

    /// One error per line, or an empty string when there are none.
    pub fn validation_errors(errors: &[String]) -> String {
        errors.iter().join("\n")
    }

    /// All three panels of a session, each under its own heading.
    pub fn report(session: &QuerySession) -> Result<String, RenderError> {
        let errors = session.errors();
        let errors_section = if errors.is_empty() {
            "(none)".to_string()
        } else {
            Self::validation_errors(&errors)
        };

        Ok([
            format!("Validation errors\n{}", errors_section),
            format!("Query model\n{}", Self::query_model(session.query())?),
            format!(
                "Transformed condition model\n{}",
                Self::condition_model(session.condition_model())?
            ),
        ]
        .iter()
        .join("\n\n"))
    }

    fn pretty<T: Serialize>(value: &T, view: &'static str) -> Result<String, RenderError> {
        serde_json::to_string_pretty(value).map_err(|e| RenderError::Serialize {
            view,
            message: e.to_string(),
        })
    }
}
