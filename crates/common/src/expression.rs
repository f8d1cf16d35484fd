//! Expression utilities for working with OXC AST

use oxc_ast::ast::{Expression, TSType, TSTypeName};
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_span::Span;

/// Convert an Expression AST node to its source code string
pub fn expr_to_string(expr: &Expression<'_>) -> String {
    let mut codegen = Codegen::new().with_options(CodegenOptions::default());
    codegen.print_expression(expr);
    codegen.into_source_text()
}

/// Slice the original source for a span. Out-of-range spans yield an empty string.
pub fn span_text(source: &str, span: Span) -> &str {
    source.get(span.start as usize..span.end as usize).unwrap_or("")
}

/// Strip parentheses and TypeScript-only expression wrappers.
///
/// `(a as boolean)`, `a!` and `a satisfies T` all classify the same way as `a`.
pub fn peel<'b, 'a>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    let mut current = expr;
    loop {
        current = match current {
            Expression::ParenthesizedExpression(paren) => &paren.expression,
            Expression::TSAsExpression(e) => &e.expression,
            Expression::TSSatisfiesExpression(e) => &e.expression,
            Expression::TSNonNullExpression(e) => &e.expression,
            Expression::TSTypeAssertion(e) => &e.expression,
            _ => return current,
        };
    }
}

/// Render a type name as written (`Foo`, `React.Foo`, `a.b.C`)
pub fn type_name_to_string(name: &TSTypeName<'_>) -> String {
    match name {
        TSTypeName::IdentifierReference(ident) => ident.name.to_string(),
        TSTypeName::QualifiedName(qualified) => {
            format!("{}.{}", type_name_to_string(&qualified.left), qualified.right.name)
        }
        _ => "this".to_string(),
    }
}

/// Check whether a type annotation is the plain `boolean` keyword
pub fn is_boolean_type(ty: &TSType<'_>) -> bool {
    matches!(ty, TSType::TSBooleanKeyword(_))
}

/// Check whether a type annotation is a function type (`() => void`)
pub fn is_function_type(ty: &TSType<'_>) -> bool {
    match ty {
        TSType::TSFunctionType(_) => true,
        TSType::TSParenthesizedType(paren) => is_function_type(&paren.type_annotation),
        // `(() => void) | undefined` for optional callbacks
        TSType::TSUnionType(union) => union.types.iter().any(is_function_type),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    #[test]
    fn test_peel_wrappers() {
        let allocator = Allocator::default();
        let expr = Parser::new(&allocator, "((flag as boolean))!", SourceType::tsx())
            .parse_expression()
            .expect("should parse");
        assert!(matches!(peel(&expr), Expression::Identifier(ident) if ident.name == "flag"));
    }

    #[test]
    fn test_span_text_out_of_range() {
        assert_eq!(span_text("abc", Span::new(1, 3)), "bc");
        assert_eq!(span_text("abc", Span::new(2, 10)), "");
    }
}
