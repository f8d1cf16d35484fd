//! JSX containment and ancestor-context probes.
//!
//! Upward lookups take the ancestor chain of the node being checked, outermost
//! first, as collected by the traversal through `Visit::enter_node`.

use oxc_ast::ast::{Expression, JSXElement, JSXFragment};
use oxc_ast::AstKind;
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;
use oxc_syntax::operator::{LogicalOperator, UnaryOperator};

use crate::component::{unwrap_function_like, DeclarationKind, FunctionLike};
use crate::constants::GATING_PROPS;
use crate::expression::peel;

#[derive(Default)]
struct JsxFinder {
    found: bool,
}

impl<'a> Visit<'a> for JsxFinder {
    fn visit_expression(&mut self, it: &Expression<'a>) {
        if !self.found {
            walk::walk_expression(self, it);
        }
    }

    fn visit_jsx_element(&mut self, _it: &JSXElement<'a>) {
        self.found = true;
    }

    fn visit_jsx_fragment(&mut self, _it: &JSXFragment<'a>) {
        self.found = true;
    }
}

/// Check if a JSX element or fragment is reachable anywhere below `expr`
pub fn contains_jsx(expr: &Expression<'_>) -> bool {
    let mut finder = JsxFinder::default();
    finder.visit_expression(expr);
    finder.found
}

/// `schema.pick(...)` -> `pick`
fn member_callee_name<'b>(callee: &'b Expression<'_>) -> Option<&'b str> {
    match peel(callee) {
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        _ => None,
    }
}

/// Check if any enclosing call is a method call named one of `names`
pub fn is_inside_call_named<S: AsRef<str>>(ancestors: &[AstKind<'_>], names: &[S]) -> bool {
    ancestors.iter().rev().any(|kind| match kind {
        AstKind::CallExpression(call) => member_callee_name(&call.callee)
            .is_some_and(|method| names.iter().any(|name| name.as_ref() == method)),
        _ => false,
    })
}

/// Check if any ancestor is a `new` expression
pub fn is_inside_new_expression(ancestors: &[AstKind<'_>]) -> bool {
    ancestors
        .iter()
        .any(|kind| matches!(kind, AstKind::NewExpression(_)))
}

/// Kind of the nearest enclosing function, named either directly or through
/// the variable it is assigned to (possibly through wrapping calls).
pub fn enclosing_function_kind(ancestors: &[AstKind<'_>]) -> Option<DeclarationKind> {
    let index = ancestors.iter().rposition(|kind| {
        matches!(kind, AstKind::Function(_) | AstKind::ArrowFunctionExpression(_))
    })?;

    let function_span: Span = match ancestors[index] {
        AstKind::Function(func) => {
            if let Some(id) = &func.id {
                return Some(DeclarationKind::of_name(&id.name));
            }
            func.span
        }
        AstKind::ArrowFunctionExpression(arrow) => arrow.span,
        _ => return None,
    };

    for kind in ancestors[..index].iter().rev() {
        match kind {
            AstKind::VariableDeclarator(decl) => {
                let binds_function = decl
                    .init
                    .as_ref()
                    .and_then(unwrap_function_like)
                    .is_some_and(|function| function_span_of(function) == function_span);
                if !binds_function {
                    return None;
                }
                return decl
                    .id
                    .get_binding_identifier()
                    .map(|ident| DeclarationKind::of_name(&ident.name));
            }
            AstKind::Function(_)
            | AstKind::ArrowFunctionExpression(_)
            | AstKind::FunctionBody(_)
            | AstKind::Program(_) => return None,
            _ => {}
        }
    }
    None
}

fn function_span_of(function: FunctionLike<'_, '_>) -> Span {
    match function {
        FunctionLike::Function(func) => func.span,
        FunctionLike::Arrow(arrow) => arrow.span,
    }
}

/// Name of the interface or type alias a member signature belongs to
pub fn enclosing_type_name<'a>(ancestors: &[AstKind<'a>]) -> Option<&'a str> {
    ancestors.iter().rev().find_map(|kind| match kind {
        AstKind::TSInterfaceDeclaration(decl) => Some(decl.id.name.as_str()),
        AstKind::TSTypeAliasDeclaration(decl) => Some(decl.id.name.as_str()),
        _ => None,
    })
}

/// Spans of the functions enclosing a node, innermost first, ending with the program
pub fn scope_chain(ancestors: &[AstKind<'_>]) -> Vec<Span> {
    ancestors
        .iter()
        .rev()
        .filter_map(|kind| match kind {
            AstKind::Function(func) => Some(func.span),
            AstKind::ArrowFunctionExpression(arrow) => Some(arrow.span),
            AstKind::Program(program) => Some(program.span),
            _ => None,
        })
        .collect()
}

/// Whether a binding identifier names a variable or parameter, as opposed to
/// a function or class
pub fn is_variable_or_parameter_binding(ancestors: &[AstKind<'_>]) -> bool {
    for kind in ancestors.iter().rev() {
        match kind {
            AstKind::VariableDeclarator(_)
            | AstKind::FormalParameter(_)
            | AstKind::CatchParameter(_) => return true,
            AstKind::Function(_)
            | AstKind::ArrowFunctionExpression(_)
            | AstKind::Class(_)
            | AstKind::Program(_) => return false,
            _ => {}
        }
    }
    false
}

/// Props that gate rendering: `<Show when={...}>`, `<If condition={...}>`
pub fn is_gating_prop(name: &str) -> bool {
    GATING_PROPS.contains(name)
}

/// Identifiers a condition is made of: `a && !b` yields `[a, b]`
pub fn gating_identifiers<'b>(expr: &'b Expression<'_>) -> Vec<&'b str> {
    let mut names = Vec::new();
    collect_gating_identifiers(expr, &mut names);
    names
}

fn collect_gating_identifiers<'b>(expr: &'b Expression<'_>, out: &mut Vec<&'b str>) {
    match peel(expr) {
        Expression::Identifier(ident) => out.push(ident.name.as_str()),
        Expression::LogicalExpression(logical) if logical.operator != LogicalOperator::Coalesce => {
            collect_gating_identifiers(&logical.left, out);
            collect_gating_identifiers(&logical.right, out);
        }
        Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::LogicalNot => {
            collect_gating_identifiers(&unary.argument, out);
        }
        _ => {}
    }
}
