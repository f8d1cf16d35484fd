//! Integration tests for jsx-conventions-linter rules

use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, JSXElement, Program, Statement};
use oxc_parser::Parser;
use oxc_span::SourceType;

use jsx_conventions_linter::rules::{
    BooleanNaming, BooleanNamingConfig, JsxStringBraces, NoInlineStyles, NoInlineStylesConfig,
};
use jsx_conventions_linter::{lint_with_config, Fix, RuleMeta, RulesConfig};

fn parse<'a>(allocator: &'a Allocator, source: &'a str) -> Option<Program<'a>> {
    let ret = Parser::new(allocator, source, SourceType::tsx()).parse();
    if ret.errors.is_empty() {
        Some(ret.program)
    } else {
        None
    }
}

/// Helper to find the first JSX element in a program
fn find_jsx_element<'a>(program: &'a Program<'a>) -> Option<&'a JSXElement<'a>> {
    program.body.iter().find_map(|stmt| match stmt {
        Statement::ExpressionStatement(expr_stmt) => match &expr_stmt.expression {
            Expression::JSXElement(elem) => Some(&**elem),
            _ => None,
        },
        _ => None,
    })
}

#[test]
fn test_no_inline_styles_pass() {
    let allocator = Allocator::default();
    let source = r#"<div className={styles.box} />"#;

    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    let diagnostics = NoInlineStyles::new().check(&element.opening_element, source);
    assert!(diagnostics.is_empty(), "should have no diagnostics");
}

#[test]
fn test_no_inline_styles_object_value() {
    let allocator = Allocator::default();
    let source = r#"<div style={{ color: "red" }} />"#;

    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    let diagnostics = NoInlineStyles::new().check(&element.opening_element, source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, NoInlineStyles::NAME);
    assert_eq!(diagnostics[0].data["attribute"], "style");
    assert!(diagnostics[0].help.is_some());
}

#[test]
fn test_no_inline_styles_custom_attributes() {
    let allocator = Allocator::default();
    let source = r#"<View style="a" sx={{ margin: 2 }} css={tw} />"#;

    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    let config: NoInlineStylesConfig =
        serde_json::from_str(r#"{ "attributes": ["sx", "css"] }"#).expect("valid config");
    let diagnostics = NoInlineStyles::with_config(config).check(&element.opening_element, source);
    let attributes: Vec<_> = diagnostics.iter().map(|d| d.data["attribute"].as_str()).collect();
    assert_eq!(attributes, vec!["sx", "css"]);
}

#[test]
fn test_jsx_string_braces_fix() {
    let allocator = Allocator::default();
    let source = r#"<a href="/home" title='Home' target={target}>Home</a>"#;

    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    let diagnostics = JsxStringBraces::new().check(&element.opening_element, source);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].data["value"], "/home");
    assert_eq!(diagnostics[1].data["value"], "Home");

    let fixed = Fix::apply(source, diagnostics.iter().flat_map(|d| d.fixes.iter()));
    assert_eq!(fixed, r#"<a href={"/home"} title={'Home'} target={target}>Home</a>"#);
}

#[test]
fn test_boolean_naming_custom_prefixes() {
    let allocator = Allocator::default();
    let source = "const loading = false;\nconst hasItems = items.length > 0;\nconst shouldShow = !hidden;";

    let program = parse(&allocator, source).expect("should parse");
    let config = RulesConfig::none().with_boolean_naming(
        BooleanNaming::new().with_allowed_prefixes(vec!["is".into(), "has".into()]),
    );
    let result = lint_with_config(source, SourceType::tsx(), &program, config);

    let names: Vec<_> = result.diagnostics.iter().map(|d| d.data["name"].as_str()).collect();
    assert_eq!(names, vec!["loading", "shouldShow"]);
    assert_eq!(result.diagnostics[0].data["prefixes"], "is, has");
    assert_eq!(result.diagnostics[0].data["suggested"], "isLoading");
}

#[test]
fn test_boolean_naming_config_defaults() {
    let config: BooleanNamingConfig =
        serde_json::from_str(r#"{ "schemaMethods": ["partial"] }"#).expect("valid config");
    assert_eq!(config.allowed_prefixes, vec!["is"]);
    assert_eq!(config.schema_methods, vec!["partial"]);
}

#[test]
fn test_rules_config_from_json_runs_only_listed_rules() {
    let allocator = Allocator::default();
    let source = r#"const open = true; <div className="x" style={s} />"#;

    let program = parse(&allocator, source).expect("should parse");
    let config = RulesConfig::from_json(r#"{ "no-inline-styles": {}, "boolean-naming": false }"#)
        .expect("valid config");
    let result = lint_with_config(source, SourceType::tsx(), &program, config);

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].rule, "no-inline-styles");
}

#[test]
fn test_typescript_only_source() {
    let allocator = Allocator::default();
    let source = "interface ModalProps { visible: boolean; closeHandler: () => void }";

    let ret = Parser::new(&allocator, source, SourceType::ts()).parse();
    assert!(ret.errors.is_empty());
    let result = lint_with_config(source, SourceType::ts(), &ret.program, RulesConfig::default());

    let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules, vec!["boolean-naming", "event-handler-naming"]);
}
