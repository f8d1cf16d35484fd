//! jsx-string-braces
//!
//! Require string literal attribute values to be written inside braces:
//! `className={"box"}` rather than `className="box"`.

use oxc_ast::ast::{JSXAttributeItem, JSXAttributeValue, JSXOpeningElement};

use common::span_text;

use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::attribute_name;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Wrap the string value \"{{value}}\" of `{{attribute}}` in braces.";

/// jsx-string-braces rule
#[derive(Debug, Clone, Default)]
pub struct JsxStringBraces;

impl RuleMeta for JsxStringBraces {
    const NAME: &'static str = "jsx-string-braces";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl JsxStringBraces {
    pub fn new() -> Self {
        Self
    }

    /// Check a JSX opening element for unbraced string attribute values
    pub fn check<'a>(&self, opening: &JSXOpeningElement<'a>, source_text: &str) -> Vec<Diagnostic> {
        opening
            .attributes
            .iter()
            .filter_map(|item| match item {
                JSXAttributeItem::Attribute(attr) => Some(attr),
                JSXAttributeItem::SpreadAttribute(_) => None,
            })
            .filter_map(|attr| match &attr.value {
                Some(JSXAttributeValue::StringLiteral(lit)) => Some((attr, lit)),
                _ => None,
            })
            .map(|(attr, lit)| {
                let diagnostic = Diagnostic::warning(Self::NAME, lit.span, MESSAGE)
                    .with_data("attribute", attribute_name(&attr.name))
                    .with_data("value", lit.value.to_string());
                match braced_literal(span_text(source_text, lit.span), lit.value.as_str()) {
                    Some(literal) => diagnostic.with_fix(
                        Fix::new(lit.span, format!("{{{literal}}}"))
                            .with_message("Wrap the string in braces"),
                    ),
                    None => diagnostic,
                }
            })
            .collect()
    }
}

/// JavaScript string literal with the same value as a JSX attribute string.
///
/// JSX attribute strings have no escapes, so the literal as written only
/// carries over when it holds no backslash or line break. Entities (`&amp;`)
/// decode differently in JSX and JavaScript, so no literal is produced.
fn braced_literal(raw: &str, value: &str) -> Option<String> {
    if raw.contains('&') {
        return None;
    }
    if raw.is_empty() || raw.contains(['\\', '\n', '\r']) {
        return serde_json::to_string(value).ok();
    }
    Some(raw.to_string())
}
