//! Structural complexity of conditions used inline in JSX.

use oxc_ast::ast::{Argument, ChainElement, Expression};
use oxc_syntax::operator::{AssignmentOperator, LogicalOperator};

use crate::expression::peel;

/// More logical operators than this is always too much for inline JSX
pub const MAX_SIMPLE_LOGICAL_OPERATORS: usize = 2;

/// Upper bound (inclusive) of the operator range where operand shape decides
pub const MAX_SHAPE_SENSITIVE_LOGICAL_OPERATORS: usize = 3;

/// Member chains deeper than this (`a.b.c`) make an operand complex
pub const MAX_SIMPLE_MEMBER_DEPTH: usize = 1;

/// Structural facts about one expression subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplexityScore {
    pub logical_operator_count: usize,
    pub has_template_literal: bool,
    pub has_logical_assignment: bool,
}

impl ComplexityScore {
    pub fn of(expr: &Expression<'_>) -> Self {
        Self {
            logical_operator_count: count_logical_operators(expr),
            has_template_literal: has_template_literal(expr),
            has_logical_assignment: has_logical_assignment(expr),
        }
    }
}

fn is_logical_assignment(operator: AssignmentOperator) -> bool {
    matches!(
        operator,
        AssignmentOperator::LogicalOr
            | AssignmentOperator::LogicalAnd
            | AssignmentOperator::LogicalNullish
    )
}

/// Sub-expressions the structural walks descend into
fn children<'b, 'a>(expr: &'b Expression<'a>) -> Vec<&'b Expression<'a>> {
    match peel(expr) {
        Expression::LogicalExpression(logical) => vec![&logical.left, &logical.right],
        Expression::AssignmentExpression(assign) => vec![&assign.right],
        Expression::ConditionalExpression(cond) => {
            vec![&cond.test, &cond.consequent, &cond.alternate]
        }
        Expression::BinaryExpression(binary) => vec![&binary.left, &binary.right],
        Expression::UnaryExpression(unary) => vec![&unary.argument],
        Expression::StaticMemberExpression(member) => vec![&member.object],
        Expression::ComputedMemberExpression(member) => vec![&member.object, &member.expression],
        Expression::PrivateFieldExpression(member) => vec![&member.object],
        Expression::CallExpression(call) => call
            .arguments
            .iter()
            .filter(|arg| !matches!(arg, Argument::SpreadElement(_)))
            .filter_map(Argument::as_expression)
            .collect(),
        _ => Vec::new(),
    }
}

/// Count `&&`, `||`, `??` and their assignment forms anywhere in the condition
pub fn count_logical_operators(expr: &Expression<'_>) -> usize {
    let own = match peel(expr) {
        Expression::LogicalExpression(_) => 1,
        Expression::AssignmentExpression(assign) if is_logical_assignment(assign.operator) => 1,
        _ => 0,
    };
    own + children(expr).into_iter().map(count_logical_operators).sum::<usize>()
}

pub fn has_template_literal(expr: &Expression<'_>) -> bool {
    match peel(expr) {
        Expression::TemplateLiteral(_) | Expression::TaggedTemplateExpression(_) => true,
        _ => children(expr).into_iter().any(has_template_literal),
    }
}

pub fn has_logical_assignment(expr: &Expression<'_>) -> bool {
    match peel(expr) {
        Expression::AssignmentExpression(assign) if is_logical_assignment(assign.operator) => true,
        _ => children(expr).into_iter().any(has_logical_assignment),
    }
}

/// Depth of a member-access chain: `a` is 0, `a.b` is 1, `a.b.c` is 2
pub fn member_chain_depth(expr: &Expression<'_>) -> usize {
    let mut depth = 0;
    let mut current = peel(expr);
    loop {
        current = match current {
            Expression::StaticMemberExpression(member) => &member.object,
            Expression::ComputedMemberExpression(member) => &member.object,
            Expression::PrivateFieldExpression(member) => &member.object,
            Expression::ChainExpression(chain) => match chain.expression.as_member_expression() {
                Some(member) => member.object(),
                None => return depth,
            },
            _ => return depth,
        };
        depth += 1;
        current = peel(current);
    }
}

/// An operand that hurts readability when combined with other operands
pub fn is_complex_operand(expr: &Expression<'_>) -> bool {
    match peel(expr) {
        Expression::CallExpression(call) => !call.arguments.is_empty(),
        // `a?.b(c)`
        Expression::ChainExpression(chain) => match &chain.expression {
            ChainElement::CallExpression(call) => !call.arguments.is_empty(),
            _ => member_chain_depth(peel(expr)) > MAX_SIMPLE_MEMBER_DEPTH,
        },
        Expression::BinaryExpression(_) | Expression::LogicalExpression(_) => true,
        Expression::UnaryExpression(unary) => is_complex_operand(&unary.argument),
        other => member_chain_depth(other) > MAX_SIMPLE_MEMBER_DEPTH,
    }
}

/// Leaves of the top-level logical chain. `a && b && c` yields `[a, b, c]`;
/// a nested chain with a different operator stays a single operand.
pub fn logical_operands<'b, 'a>(expr: &'b Expression<'a>) -> Vec<&'b Expression<'a>> {
    let Expression::LogicalExpression(logical) = peel(expr) else {
        return Vec::new();
    };
    let mut operands = Vec::new();
    collect_operands(logical.operator, &logical.left, &mut operands);
    collect_operands(logical.operator, &logical.right, &mut operands);
    operands
}

fn collect_operands<'b, 'a>(
    operator: LogicalOperator,
    expr: &'b Expression<'a>,
    out: &mut Vec<&'b Expression<'a>>,
) {
    match peel(expr) {
        Expression::LogicalExpression(inner) if inner.operator == operator => {
            collect_operands(operator, &inner.left, out);
            collect_operands(operator, &inner.right, out);
        }
        _ => out.push(expr),
    }
}

/// Why a condition is too complex for inline JSX
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityViolation {
    TooManyOperators,
    LogicalTernaryTest,
    ComplexOperands,
    TemplateLiteral,
    LogicalAssignment,
}

/// Apply the inline-JSX readability policy to a condition
pub fn complexity_violation(expr: &Expression<'_>) -> Option<ComplexityViolation> {
    let score = ComplexityScore::of(expr);

    if score.has_logical_assignment {
        return Some(ComplexityViolation::LogicalAssignment);
    }
    if score.logical_operator_count > MAX_SIMPLE_LOGICAL_OPERATORS {
        return Some(ComplexityViolation::TooManyOperators);
    }
    if let Expression::ConditionalExpression(cond) = peel(expr) {
        if count_logical_operators(&cond.test) > 0 {
            return Some(ComplexityViolation::LogicalTernaryTest);
        }
    }
    if (MAX_SIMPLE_LOGICAL_OPERATORS..=MAX_SHAPE_SENSITIVE_LOGICAL_OPERATORS)
        .contains(&score.logical_operator_count)
        && logical_operands(expr).into_iter().any(is_complex_operand)
    {
        return Some(ComplexityViolation::ComplexOperands);
    }
    if score.logical_operator_count >= 1 && score.has_template_literal {
        return Some(ComplexityViolation::TemplateLiteral);
    }
    None
}
