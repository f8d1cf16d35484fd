//! Boolean-ness and derivedness of expressions.
//!
//! Three questions are answered for an expression:
//! - is it boolean at all (`is_boolean`),
//! - does every leaf look boolean (`is_likely_boolean`, stricter, also trusts names),
//! - does it combine or transform boolean-shaped values (`is_derived`).
//!
//! A derived expression deserves its own name; a bare passthrough of one
//! identifier does not.

use oxc_ast::ast::{Argument, Expression};
use oxc_syntax::operator::{BinaryOperator, LogicalOperator, UnaryOperator};

use crate::constants::{BOOLEAN_VERBS, CALLBACK_WRAPPERS};
use crate::expression::peel;

/// Result of classifying one expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpressionClassification {
    pub is_boolean: bool,
    pub is_likely_boolean: bool,
    pub is_derived: bool,
}

/// Classify an expression. Pure function of the subtree.
pub fn classify(expr: &Expression<'_>) -> ExpressionClassification {
    ExpressionClassification {
        is_boolean: is_boolean(expr),
        is_likely_boolean: is_likely_boolean(expr),
        is_derived: is_derived(expr),
    }
}

/// Comparison operators that always produce a boolean
pub fn is_comparison(operator: BinaryOperator) -> bool {
    matches!(
        operator,
        BinaryOperator::Equality
            | BinaryOperator::StrictEquality
            | BinaryOperator::Inequality
            | BinaryOperator::StrictInequality
            | BinaryOperator::LessThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessEqualThan
            | BinaryOperator::GreaterEqualThan
    )
}

/// Check if a name reads as a boolean: a verb followed by an uppercase letter
pub fn is_boolean_like_name(name: &str) -> bool {
    let split = name
        .char_indices()
        .find(|(_, c)| c.is_ascii_uppercase())
        .map(|(i, _)| i);
    match split {
        Some(i) if i > 0 => BOOLEAN_VERBS.contains(&name[..i]),
        _ => false,
    }
}

pub fn is_boolean(expr: &Expression<'_>) -> bool {
    match peel(expr) {
        Expression::BooleanLiteral(_) => true,
        Expression::UnaryExpression(unary) => unary.operator == UnaryOperator::LogicalNot,
        Expression::BinaryExpression(binary) => is_comparison(binary.operator),
        // `??` hands back its fallback untouched, which is rarely a boolean
        Expression::LogicalExpression(logical) => logical.operator != LogicalOperator::Coalesce,
        Expression::ConditionalExpression(cond) => {
            is_boolean(&cond.consequent) || is_boolean(&cond.alternate)
        }
        _ => false,
    }
}

pub fn is_likely_boolean(expr: &Expression<'_>) -> bool {
    match peel(expr) {
        Expression::BooleanLiteral(_) => true,
        Expression::Identifier(ident) => is_boolean_like_name(&ident.name),
        Expression::UnaryExpression(unary) => unary.operator == UnaryOperator::LogicalNot,
        Expression::BinaryExpression(binary) => is_comparison(binary.operator),
        Expression::LogicalExpression(logical) => {
            logical.operator != LogicalOperator::Coalesce
                && is_likely_boolean(&logical.left)
                && is_likely_boolean(&logical.right)
        }
        Expression::ConditionalExpression(cond) => {
            is_likely_boolean(&cond.consequent) && is_likely_boolean(&cond.alternate)
        }
        _ => false,
    }
}

pub fn is_derived(expr: &Expression<'_>) -> bool {
    if is_string_fallback(expr) {
        return false;
    }
    match peel(expr) {
        Expression::LogicalExpression(logical) => {
            is_likely_boolean(&logical.left) && is_likely_boolean(&logical.right)
        }
        Expression::UnaryExpression(unary) => unary.operator == UnaryOperator::LogicalNot,
        Expression::BinaryExpression(binary) => is_comparison(binary.operator),
        Expression::ConditionalExpression(cond) => {
            is_likely_boolean(&cond.consequent) && is_likely_boolean(&cond.alternate)
        }
        _ => false,
    }
}

/// `value || 'default'`: a logical-or with a string literal on either side
pub fn is_string_fallback(expr: &Expression<'_>) -> bool {
    let Expression::LogicalExpression(logical) = peel(expr) else {
        return false;
    };
    logical.operator == LogicalOperator::Or
        && (is_string_literal(&logical.left) || is_string_literal(&logical.right))
}

fn is_string_literal(expr: &Expression<'_>) -> bool {
    match peel(expr) {
        Expression::StringLiteral(_) => true,
        Expression::TemplateLiteral(template) => template.expressions.is_empty(),
        _ => false,
    }
}

/// Check if a logical `&&`/`||` expression does not use the string fallback idiom
pub fn is_combining_logical(expr: &Expression<'_>) -> bool {
    matches!(
        peel(expr),
        Expression::LogicalExpression(logical) if logical.operator != LogicalOperator::Coalesce
    ) && !is_string_fallback(expr)
}

/// Arrow/function expressions, optionally wrapped in `useCallback(fn, deps)`
pub fn is_event_handler_shaped(expr: &Expression<'_>) -> bool {
    match peel(expr) {
        Expression::ArrowFunctionExpression(_) | Expression::FunctionExpression(_) => true,
        Expression::CallExpression(call) => {
            let wrapper = match peel(&call.callee) {
                Expression::Identifier(ident) => Some(ident.name.as_str()),
                Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
                _ => None,
            };
            wrapper.is_some_and(|name| CALLBACK_WRAPPERS.contains(name))
                && call.arguments.first().is_some_and(|arg| match arg {
                    Argument::SpreadElement(_) => false,
                    arg => arg.as_expression().is_some_and(is_event_handler_shaped),
                })
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn with_expr<R>(source: &str, f: impl FnOnce(&Expression<'_>) -> R) -> R {
        let allocator = Allocator::default();
        let expr = Parser::new(&allocator, source, SourceType::tsx())
            .parse_expression()
            .expect("should parse");
        f(&expr)
    }

    fn classified(source: &str) -> ExpressionClassification {
        with_expr(source, classify)
    }

    #[test]
    fn test_boolean_literals() {
        assert!(classified("true").is_boolean);
        assert!(classified("false").is_boolean);
        assert!(!classified("true").is_derived);
    }

    #[test]
    fn test_boolean_operators() {
        assert!(classified("!ready").is_boolean);
        assert!(classified("count > 0").is_boolean);
        assert!(classified("a === b").is_boolean);
        assert!(classified("a && b").is_boolean);
        assert!(classified("a || b").is_boolean);
        assert!(!classified("a ?? b").is_boolean);
        assert!(!classified("count + 1").is_boolean);
        assert!(!classified("'text'").is_boolean);
    }

    #[test]
    fn test_ternary_boolean_if_either_branch() {
        assert!(classified("x ? true : 'no'").is_boolean);
        assert!(!classified("x ? 'yes' : 'no'").is_boolean);
        assert!(!classified("x ? true : 'no'").is_likely_boolean);
        assert!(classified("x ? isOpen : false").is_likely_boolean);
    }

    #[test]
    fn test_likely_boolean_names() {
        assert!(classified("isOpen").is_likely_boolean);
        assert!(classified("hasError").is_likely_boolean);
        assert!(classified("shouldRender").is_likely_boolean);
        assert!(!classified("island").is_likely_boolean);
        assert!(!classified("user").is_likely_boolean);
        assert!(!classified("is").is_likely_boolean);
    }

    #[test]
    fn test_string_fallback_is_never_derived() {
        assert!(!classified("name || 'Anonymous'").is_derived);
        assert!(!classified("isOpen || 'closed'").is_derived);
        assert!(!classified("'fallback' || isReady").is_derived);
        assert!(with_expr("title || \"Untitled\"", is_string_fallback));
        assert!(!with_expr("title ?? 'Untitled'", is_string_fallback));
    }

    #[test]
    fn test_plain_identifiers_are_not_derived() {
        assert!(!classified("a && b").is_derived);
        assert!(!classified("user && data").is_derived);
        assert!(!classified("isReady").is_derived);
    }

    #[test]
    fn test_derived_expressions() {
        assert!(classified("isLoaded && !isError").is_derived);
        assert!(classified("!user").is_derived);
        assert!(classified("items.length > 0").is_derived);
        assert!(classified("mode ? isOpen : isClosed").is_derived);
        assert!(!classified("mode ? isOpen : 'closed'").is_derived);
    }

    #[test]
    fn test_combining_logical() {
        assert!(with_expr("error || validationError", is_combining_logical));
        assert!(!with_expr("error || 'none'", is_combining_logical));
        assert!(!with_expr("error ?? other", is_combining_logical));
    }

    #[test]
    fn test_event_handler_shaped() {
        assert!(with_expr("() => submit()", is_event_handler_shaped));
        assert!(with_expr("function (e) { e.preventDefault(); }", is_event_handler_shaped));
        assert!(with_expr("useCallback(() => setOpen(true), [])", is_event_handler_shaped));
        assert!(with_expr("React.useCallback((e) => e, [])", is_event_handler_shaped));
        assert!(!with_expr("useMemo(() => 1, [])", is_event_handler_shaped));
        assert!(!with_expr("props.onClick", is_event_handler_shaped));
    }
}
