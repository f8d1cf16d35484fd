//! no-inline-styles
//!
//! Disallow inline style attributes; styling belongs in stylesheets or classes.

use oxc_ast::ast::{JSXAttributeItem, JSXAttributeValue, JSXOpeningElement};
use oxc_span::GetSpan;
use serde::{Deserialize, Serialize};

use common::{expr_to_string, span_text};

use crate::diagnostic::Diagnostic;
use crate::utils::attribute_name;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Avoid inline styles: move `{{attribute}}={{value}}` into a stylesheet or class.";

/// Configuration for no-inline-styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoInlineStylesConfig {
    /// Attribute names treated as inline styles
    pub attributes: Vec<String>,
}

impl Default for NoInlineStylesConfig {
    fn default() -> Self {
        Self {
            attributes: vec!["style".to_string()],
        }
    }
}

/// no-inline-styles rule
#[derive(Debug, Clone, Default)]
pub struct NoInlineStyles {
    pub config: NoInlineStylesConfig,
}

impl RuleMeta for NoInlineStyles {
    const NAME: &'static str = "no-inline-styles";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl NoInlineStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NoInlineStylesConfig) -> Self {
        Self { config }
    }

    /// Check a JSX opening element for inline style attributes
    pub fn check<'a>(&self, opening: &JSXOpeningElement<'a>, source_text: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for item in &opening.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            let name = attribute_name(&attr.name);
            if !self.config.attributes.contains(&name) {
                continue;
            }

            let value = match &attr.value {
                Some(JSXAttributeValue::StringLiteral(lit)) => span_text(source_text, lit.span).to_string(),
                // `style={}` carries no value
                Some(JSXAttributeValue::ExpressionContainer(container)) => {
                    match container.expression.as_expression() {
                        Some(expr) => format!("{{{}}}", expr_to_string(expr)),
                        None => continue,
                    }
                }
                Some(other) => span_text(source_text, other.span()).to_string(),
                None => continue,
            };

            diagnostics.push(
                Diagnostic::warning(Self::NAME, attr.span, MESSAGE)
                    .with_data("attribute", name)
                    .with_data("value", value)
                    .with_help("Use a CSS class or a styled component instead."),
            );
        }

        diagnostics
    }
}
