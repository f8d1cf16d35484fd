//! Errors raised by the host layer around the rules

/// Failures outside the rules themselves; rules only ever return diagnostics
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The parser could not produce a usable tree
    #[error("Parse failure: {}", errors.join("; "))]
    Parse { errors: Vec<String> },

    #[error("Invalid rule configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Unknown rule in configuration: {0}")]
    UnknownRule(String),
}
