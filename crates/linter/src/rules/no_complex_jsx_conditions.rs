//! no-complex-jsx-conditions
//!
//! Disallow complex boolean logic written inline in JSX. Long `&&`/`||`
//! chains, logical ternary tests and similar conditions should be pulled out
//! into a descriptively named variable.

use oxc_ast::ast::JSXExpressionContainer;

use common::{complexity_violation, ComplexityViolation};

use crate::diagnostic::Diagnostic;
use crate::utils::ContainerPosition;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str =
    "Complex condition in {{context}}. Extract it into a descriptively named variable.";

fn violation_help(violation: ComplexityViolation) -> &'static str {
    match violation {
        ComplexityViolation::TooManyOperators => "The condition chains more than two logical operators.",
        ComplexityViolation::LogicalTernaryTest => "The ternary test combines values with logical operators.",
        ComplexityViolation::ComplexOperands => {
            "The chain mixes logical operators with calls, comparisons or deep member access."
        }
        ComplexityViolation::TemplateLiteral => "The condition builds a template literal.",
        ComplexityViolation::LogicalAssignment => "The condition assigns with `||=`, `&&=` or `??=`.",
    }
}

/// no-complex-jsx-conditions rule
#[derive(Debug, Clone, Default)]
pub struct NoComplexJsxConditions;

impl RuleMeta for NoComplexJsxConditions {
    const NAME: &'static str = "no-complex-jsx-conditions";
    const CATEGORY: RuleCategory = RuleCategory::Pedantic;
}

impl NoComplexJsxConditions {
    pub fn new() -> Self {
        Self
    }

    /// Check a JSX expression container found at `position`
    pub fn check<'a>(
        &self,
        container: &JSXExpressionContainer<'a>,
        position: &ContainerPosition,
    ) -> Vec<Diagnostic> {
        let Some(expr) = container.expression.as_expression() else {
            return Vec::new();
        };
        let Some(violation) = complexity_violation(expr) else {
            return Vec::new();
        };

        vec![Diagnostic::warning(Self::NAME, container.span, MESSAGE)
            .with_data("context", position.describe())
            .with_help(violation_help(violation))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::{Expression, JSXAttributeItem, JSXAttributeValue, JSXChild, Statement};
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn check_attribute(source: &str) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::jsx()).parse();
        let Some(Statement::ExpressionStatement(stmt)) = ret.program.body.first() else {
            panic!("expected an expression statement");
        };
        let Expression::JSXElement(element) = &stmt.expression else {
            panic!("expected a JSX element");
        };
        let Some(JSXAttributeItem::Attribute(attr)) = element.opening_element.attributes.first() else {
            panic!("expected an attribute");
        };
        let Some(JSXAttributeValue::ExpressionContainer(container)) = &attr.value else {
            panic!("expected an expression container");
        };
        let position = ContainerPosition::Attribute {
            attribute: "condition".to_string(),
            element: "Conditional".to_string(),
        };
        NoComplexJsxConditions::new().check(container, &position)
    }

    fn check_child(source: &str) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::jsx()).parse();
        let Some(Statement::ExpressionStatement(stmt)) = ret.program.body.first() else {
            panic!("expected an expression statement");
        };
        let Expression::JSXElement(element) = &stmt.expression else {
            panic!("expected a JSX element");
        };
        let Some(JSXChild::ExpressionContainer(container)) = element.children.first() else {
            panic!("expected an expression child");
        };
        let position = ContainerPosition::Child { element: "div".to_string() };
        NoComplexJsxConditions::new().check(container, &position)
    }

    #[test]
    fn test_long_chain_in_attribute() {
        let diagnostics =
            check_attribute("<Conditional condition={user && data && !isLoading && !error} />");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Complex condition in the `condition` prop of <Conditional>. Extract it into a descriptively named variable."
        );
    }

    #[test]
    fn test_simple_conditions_pass() {
        assert!(check_attribute("<Conditional condition={isReady} />").is_empty());
        assert!(check_attribute("<Conditional condition={a && b} />").is_empty());
        assert!(check_child("<div>{isOpen && <Modal />}</div>").is_empty());
        assert!(check_child("<div>{}</div>").is_empty());
    }

    #[test]
    fn test_logical_ternary_child() {
        let diagnostics = check_child("<div>{isOpen || isPinned ? <Panel /> : null}</div>");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].data["context"], "the children of <div>");
    }

    #[test]
    fn test_complex_operand() {
        assert_eq!(check_child("<div>{ready && user.profile.name && <Name />}</div>").len(), 1);
        assert!(check_child("<div>{ready && user.name && <Name />}</div>").is_empty());
        // A lone operator never looks at operand shape
        assert!(check_child("<div>{user.profile.name && <Name />}</div>").is_empty());
    }
}
