//! JSX/TSX naming and style convention rules
//!
//! Rules run over an oxc AST in a single pass. They can be used:
//! 1. Individually, by calling a rule's `check_*` methods on AST nodes
//! 2. Together, through [`LintRunner`] and a [`RulesConfig`]

pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;
mod error;

pub use context::{DerivedConditionals, LintContext};
pub use diagnostic::{render_template, Diagnostic, DiagnosticSeverity, Fix};
pub use error::LintError;
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that suggest improvements
    Pedantic,
    /// Rules that enforce naming and formatting conventions
    Style,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
}
