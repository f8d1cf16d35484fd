//! End-to-end lint tests
//!
//! These tests parse whole sources through the facade and check the
//! diagnostics each rule reports.

use jsx_conventions::rules::{BooleanNaming, NoInlineStyles, PropInterfaceNaming};
use jsx_conventions::{
    lint_source, lint_source_with_config, Diagnostic, LintError, LintResult, RuleMeta, RulesConfig,
    SourceType,
};

fn lint(source: &str) -> LintResult {
    lint_source(source, SourceType::tsx()).expect("should parse")
}

fn lint_only(source: &str, config: RulesConfig) -> LintResult {
    lint_source_with_config(source, SourceType::tsx(), config).expect("should parse")
}

/// Short, order-preserving summary for snapshotting
fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{} [{}..{}] {}", d.rule, d.start, d.end, d.message))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_boolean_variable_gets_prefix() {
    let result = lint("const visible = true;");
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.rule, BooleanNaming::NAME);
    assert_eq!(diagnostic.data["name"], "visible");
    assert_eq!(diagnostic.data["suggested"], "isVisible");
    insta::assert_snapshot!(
        diagnostic.message,
        @"Boolean variable `visible` should start with one of: is. Consider renaming it to `isVisible`."
    );
}

#[test]
fn test_derived_condition_reported_only_when_gating_jsx() {
    let config = RulesConfig::none().with_derived_conditional_naming(true);

    let source = r#"
        const hasError = error || validationError;
        const view = <div>{hasError && <ErrorMessage />}</div>;
    "#;
    let result = lint_only(source, config.clone());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].data["name"], "hasError");
    assert_eq!(result.diagnostics[0].data["suggested"], "_hasError");
    let declared_at = source.find("hasError").expect("declared") as u32;
    assert_eq!(result.diagnostics[0].start, declared_at);

    let unused = lint_only("const hasError = error || validationError;", config);
    assert!(unused.diagnostics.is_empty());
}

#[test]
fn test_complex_gate_condition() {
    let config = RulesConfig::none().with_no_complex_jsx_conditions(true);
    let result = lint_only(
        "<Conditional condition={user && data && !isLoading && !error}><Dashboard /></Conditional>",
        config,
    );
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].data["context"],
        "the `condition` prop of <Conditional>"
    );
}

#[test]
fn test_string_attribute_braces_and_fix() {
    let source = r#"<div className="text-center">Hello</div>"#;
    let result = lint_only(source, RulesConfig::none().with_jsx_string_braces(true));
    assert_eq!(result.diagnostics.len(), 1);
    let data: Vec<_> = result.diagnostics[0]
        .data
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(data, vec![("attribute", "className"), ("value", "text-center")]);
    assert_eq!(
        result.apply_fixes(source),
        r#"<div className={"text-center"}>Hello</div>"#
    );
}

#[test]
fn test_props_interface_named_after_component() {
    let source = r#"
        interface ButtonOptions { label: string }
        function Button({ label }: ButtonOptions) {
            return <button>{label}</button>;
        }
    "#;
    let result = lint(source);
    let diagnostics = result.diagnostics_for(PropInterfaceNaming::NAME);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].data["actual"], "ButtonOptions");
    assert_eq!(diagnostics[0].data["expected"], "ButtonProps");
}

// ============================================================================
// Whole files
// ============================================================================

#[test]
fn test_component_file() {
    let source = r#"
interface CardProps {
  expanded: boolean;
  handleToggle: () => void;
}

export const Card = ({ expanded, handleToggle }: CardProps) => {
  const onHeaderClick = () => handleToggle();
  const isBodyVisible = expanded && !collapsed;
  return (
    <section style={styles.card} role="region">
      <header onClick={onHeaderClick} />
      {isBodyVisible && <Body />}
    </section>
  );
};
"#;
    let result = lint(source);
    insta::assert_snapshot!(summarize(&result.diagnostics), @r#"
    boolean-naming [25..33] Boolean property `expanded` should start with one of: is. Consider renaming it to `isExpanded`.
    event-handler-naming [46..58] Event handler prop `handleToggle` should be named `onToggle`.
    event-handler-naming [148..161] Event handler `onHeaderClick` should be named `handleHeaderClick`.
    no-inline-styles [258..277] Avoid inline styles: move `style={styles.card}` into a stylesheet or class.
    jsx-string-braces [283..291] Wrap the string value "region" of `role` in braces.
    derived-conditional-naming [194..207] Derived condition `isBodyVisible` is used to render JSX; prefix it with an underscore: `_isBodyVisible`.
    "#);
}

#[test]
fn test_compliant_file_is_clean() {
    let source = r#"
interface ToggleProps {
  isOn: boolean;
  onChange: (isOn: boolean) => void;
}

export function Toggle({ isOn, onChange }: ToggleProps) {
  const handleClick = () => onChange(!isOn);
  const _isLabelled = isOn && hasLabel;
  return (
    <button className={"toggle"} onClick={handleClick}>
      {_isLabelled && <Label />}
    </button>
  );
}
"#;
    let result = lint(source);
    assert!(result.diagnostics.is_empty(), "{}", summarize(&result.diagnostics));
}

#[test]
fn test_custom_style_attributes_from_json() {
    let config = RulesConfig::from_json(r#"{ "no-inline-styles": { "attributes": ["sx"] } }"#)
        .expect("valid config");
    let result = lint_only(r#"<Box sx={{ mt: 2 }} style={base} />"#, config);
    assert_eq!(result.diagnostics_for(NoInlineStyles::NAME).len(), 1);
    assert_eq!(result.diagnostics[0].data["attribute"], "sx");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_parse_errors_are_reported() {
    let err = lint_source("const = ;", SourceType::tsx()).expect_err("should fail to parse");
    match &err {
        LintError::Parse { errors } => assert!(!errors.is_empty()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("Parse failure: "));
}

#[test]
fn test_unknown_rule_in_config() {
    let err = RulesConfig::from_json(r#"{ "no-console": true }"#).expect_err("unknown rule");
    assert_eq!(err.to_string(), "Unknown rule in configuration: no-console");
}
