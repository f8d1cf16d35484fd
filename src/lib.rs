//! JSX/TSX naming and style conventions
//!
//! Parses a source file with OXC and runs the convention rules over it in a
//! single pass.
//!
//! ## Usage
//!
//! ```rust
//! use jsx_conventions::{lint_source, SourceType};
//!
//! let result = lint_source(r#"<div className="box" />"#, SourceType::tsx()).unwrap();
//! for diagnostic in &result.diagnostics {
//!     println!("{}: {}", diagnostic.rule, diagnostic.message);
//! }
//! ```

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use tracing::debug;

pub use jsx_conventions_linter::rules;
pub use jsx_conventions_linter::{
    render_template, Diagnostic, DiagnosticSeverity, Fix, LintError, LintResult, RuleCategory,
    RuleMeta, RulesConfig,
};
pub use oxc_span::SourceType;

/// Lint source code with every rule enabled
pub fn lint_source(source: &str, source_type: SourceType) -> Result<LintResult, LintError> {
    lint_source_with_config(source, source_type, RulesConfig::default())
}

/// Lint source code with the given rule configuration
pub fn lint_source_with_config(
    source: &str,
    source_type: SourceType,
    config: RulesConfig,
) -> Result<LintResult, LintError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();

    if !ret.errors.is_empty() {
        debug!(errors = ret.errors.len(), "source failed to parse");
        return Err(LintError::Parse {
            errors: ret.errors.iter().map(ToString::to_string).collect(),
        });
    }

    Ok(jsx_conventions_linter::lint_with_config(
        source,
        source_type,
        &ret.program,
        config,
    ))
}
