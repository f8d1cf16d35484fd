//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics efficiently.

use oxc_ast::ast::{
    BindingIdentifier, ConditionalExpression, FormalParameter, Function, JSXExpressionContainer, JSXOpeningElement,
    LogicalExpression, ObjectProperty, Program, TSSignature, VariableDeclarator,
};
use oxc_ast::AstKind;
use oxc_ast_visit::{walk, Visit};
use oxc_span::{SourceType, Span};
use oxc_syntax::operator::LogicalOperator;
use oxc_syntax::scope::ScopeFlags;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use common::contains_jsx;
use common::probe::{is_gating_prop, is_variable_or_parameter_binding, scope_chain};

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::error::LintError;
use crate::rules::{
    BooleanNaming, DerivedConditionalNaming, EventHandlerNaming, JsxStringBraces,
    NoComplexJsxConditions, NoInlineStyles, PropInterfaceNaming,
};
use crate::utils::ContainerPosition;
use crate::RuleMeta;

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub boolean_naming: Option<BooleanNaming>,
    pub derived_conditional_naming: bool,
    pub event_handler_naming: bool,
    pub jsx_string_braces: bool,
    pub no_complex_jsx_conditions: bool,
    pub no_inline_styles: Option<NoInlineStyles>,
    pub prop_interface_naming: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            boolean_naming: Some(BooleanNaming::new()),
            derived_conditional_naming: true,
            event_handler_naming: true,
            jsx_string_braces: true,
            no_complex_jsx_conditions: true,
            no_inline_styles: Some(NoInlineStyles::new()),
            prop_interface_naming: true,
        }
    }
}

/// A rule entry in JSON configuration: `false`, `true` or an options object
#[derive(Deserialize)]
#[serde(untagged)]
enum RuleSetting<T> {
    Toggle(bool),
    Options(T),
}

fn configured_rule<C: DeserializeOwned, R>(
    value: Value,
    default: impl FnOnce() -> R,
    with_config: impl FnOnce(C) -> R,
) -> Result<Option<R>, LintError> {
    Ok(match serde_json::from_value::<RuleSetting<C>>(value)? {
        RuleSetting::Toggle(false) => None,
        RuleSetting::Toggle(true) => Some(default()),
        RuleSetting::Options(config) => Some(with_config(config)),
    })
}

/// Rules without options accept `true`, `false` or an (ignored) options object
fn toggled_rule(value: Value) -> Result<bool, LintError> {
    Ok(
        match serde_json::from_value::<RuleSetting<serde_json::Map<String, Value>>>(value)? {
            RuleSetting::Toggle(enabled) => enabled,
            RuleSetting::Options(_) => true,
        },
    )
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            boolean_naming: None,
            derived_conditional_naming: false,
            event_handler_naming: false,
            jsx_string_braces: false,
            no_complex_jsx_conditions: false,
            no_inline_styles: None,
            prop_interface_naming: false,
        }
    }

    /// Read a configuration object keyed by rule id:
    ///
    /// ```json
    /// { "boolean-naming": { "allowedPrefixes": ["is", "has"] }, "jsx-string-braces": true }
    /// ```
    ///
    /// Rules not named stay disabled.
    pub fn from_json(json: &str) -> Result<Self, LintError> {
        let entries: serde_json::Map<String, Value> = serde_json::from_str(json)?;
        let mut config = Self::none();

        for (rule, value) in entries {
            match rule.as_str() {
                name if name == BooleanNaming::NAME => {
                    config.boolean_naming =
                        configured_rule(value, BooleanNaming::new, BooleanNaming::with_config)?;
                }
                name if name == NoInlineStyles::NAME => {
                    config.no_inline_styles =
                        configured_rule(value, NoInlineStyles::new, NoInlineStyles::with_config)?;
                }
                name if name == DerivedConditionalNaming::NAME => {
                    config.derived_conditional_naming = toggled_rule(value)?;
                }
                name if name == EventHandlerNaming::NAME => {
                    config.event_handler_naming = toggled_rule(value)?;
                }
                name if name == JsxStringBraces::NAME => {
                    config.jsx_string_braces = toggled_rule(value)?;
                }
                name if name == NoComplexJsxConditions::NAME => {
                    config.no_complex_jsx_conditions = toggled_rule(value)?;
                }
                name if name == PropInterfaceNaming::NAME => {
                    config.prop_interface_naming = toggled_rule(value)?;
                }
                _ => return Err(LintError::UnknownRule(rule)),
            }
        }

        Ok(config)
    }

    pub fn with_boolean_naming(mut self, rule: BooleanNaming) -> Self {
        self.boolean_naming = Some(rule);
        self
    }

    pub fn with_derived_conditional_naming(mut self, enabled: bool) -> Self {
        self.derived_conditional_naming = enabled;
        self
    }

    pub fn with_event_handler_naming(mut self, enabled: bool) -> Self {
        self.event_handler_naming = enabled;
        self
    }

    pub fn with_jsx_string_braces(mut self, enabled: bool) -> Self {
        self.jsx_string_braces = enabled;
        self
    }

    pub fn with_no_complex_jsx_conditions(mut self, enabled: bool) -> Self {
        self.no_complex_jsx_conditions = enabled;
        self
    }

    pub fn with_no_inline_styles(mut self, rule: NoInlineStyles) -> Self {
        self.no_inline_styles = Some(rule);
        self
    }

    pub fn with_prop_interface_naming(mut self, enabled: bool) -> Self {
        self.prop_interface_naming = enabled;
        self
    }

    /// Ids of the enabled rules
    pub fn enabled_rules(&self) -> Vec<&'static str> {
        [
            (self.boolean_naming.is_some(), BooleanNaming::NAME),
            (self.derived_conditional_naming, DerivedConditionalNaming::NAME),
            (self.event_handler_naming, EventHandlerNaming::NAME),
            (self.jsx_string_braces, JsxStringBraces::NAME),
            (self.no_complex_jsx_conditions, NoComplexJsxConditions::NAME),
            (self.no_inline_styles.is_some(), NoInlineStyles::NAME),
            (self.prop_interface_naming, PropInterfaceNaming::NAME),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }
}

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self {
            ctx,
            config,
            diagnostics: Vec::new(),
        }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        debug!(
            rules = ?self.config.enabled_rules(),
            typescript = self.ctx.is_typescript(),
            "starting lint pass"
        );
        self.visit_program(program);
        debug!(
            diagnostics = self.diagnostics.len(),
            unused_derived_conditionals = self.ctx.derived_conditionals().len(),
            "finished lint pass"
        );
        LintResult {
            diagnostics: self.diagnostics,
        }
    }

    /// Function (or program) that owns bindings declared at the current node
    fn current_scope(&self) -> Span {
        scope_chain(self.ctx.ancestors()).first().copied().unwrap_or_default()
    }

    /// Check a variable declarator with all applicable rules
    fn check_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        // boolean-naming
        if let Some(rule) = &self.config.boolean_naming {
            self.diagnostics.extend(rule.check_variable_declarator(decl));
        }

        // derived-conditional-naming: only recorded here, reported when used
        if self.config.derived_conditional_naming {
            let rule = DerivedConditionalNaming::new();
            let scope = self.current_scope();
            rule.record_declarator(decl, scope, self.ctx.derived_conditionals_mut());
        }

        // event-handler-naming
        if self.config.event_handler_naming {
            let rule = EventHandlerNaming::new();
            self.diagnostics
                .extend(rule.check_variable_declarator(decl, self.ctx.ancestors()));
        }

        // prop-interface-naming
        if self.config.prop_interface_naming {
            let rule = PropInterfaceNaming::new();
            self.diagnostics
                .extend(rule.check_variable_declarator(decl, self.ctx.source_text()));
        }
    }

    fn check_ts_signature(&mut self, signature: &TSSignature<'a>) {
        match signature {
            TSSignature::TSPropertySignature(property) => {
                if let Some(rule) = &self.config.boolean_naming {
                    self.diagnostics.extend(rule.check_property_signature(property));
                }
                if self.config.event_handler_naming {
                    let rule = EventHandlerNaming::new();
                    self.diagnostics
                        .extend(rule.check_property_signature(property, self.ctx.ancestors()));
                }
            }
            TSSignature::TSMethodSignature(method) => {
                if self.config.event_handler_naming {
                    let rule = EventHandlerNaming::new();
                    self.diagnostics
                        .extend(rule.check_method_signature(method, self.ctx.ancestors()));
                }
            }
            _ => {}
        }
    }

    /// Check a JSX opening element with all applicable rules
    fn check_jsx_opening_element(&mut self, opening: &JSXOpeningElement<'a>) {
        // no-inline-styles
        if let Some(rule) = &self.config.no_inline_styles {
            self.diagnostics.extend(rule.check(opening, self.ctx.source_text()));
        }

        // jsx-string-braces
        if self.config.jsx_string_braces {
            let rule = JsxStringBraces::new();
            self.diagnostics.extend(rule.check(opening, self.ctx.source_text()));
        }
    }

    /// Check a JSX expression container, in an attribute or among children
    fn check_jsx_expression_container(&mut self, container: &JSXExpressionContainer<'a>) {
        let Some(position) = ContainerPosition::of(self.ctx.ancestors()) else {
            return;
        };

        // no-complex-jsx-conditions
        if self.config.no_complex_jsx_conditions {
            let rule = NoComplexJsxConditions::new();
            self.diagnostics.extend(rule.check(container, &position));
        }

        // derived-conditional-naming: `<Show when={...}>`
        if self.config.derived_conditional_naming && position.attribute().is_some_and(is_gating_prop) {
            if let Some(expr) = container.expression.as_expression() {
                let rule = DerivedConditionalNaming::new();
                let scopes = scope_chain(self.ctx.ancestors());
                self.diagnostics
                    .extend(rule.check_gate(expr, &scopes, self.ctx.derived_conditionals_mut()));
            }
        }
    }

    /// `condition && <Jsx />`
    fn check_logical_expression(&mut self, logical: &LogicalExpression<'a>) {
        if self.config.derived_conditional_naming
            && logical.operator == LogicalOperator::And
            && contains_jsx(&logical.right)
        {
            let rule = DerivedConditionalNaming::new();
            let scopes = scope_chain(self.ctx.ancestors());
            self.diagnostics.extend(rule.check_gate(
                &logical.left,
                &scopes,
                self.ctx.derived_conditionals_mut(),
            ));
        }
    }

    /// `condition ? <Jsx /> : fallback`
    fn check_conditional_expression(&mut self, conditional: &ConditionalExpression<'a>) {
        if self.config.derived_conditional_naming
            && (contains_jsx(&conditional.consequent) || contains_jsx(&conditional.alternate))
        {
            let rule = DerivedConditionalNaming::new();
            let scopes = scope_chain(self.ctx.ancestors());
            self.diagnostics.extend(rule.check_gate(
                &conditional.test,
                &scopes,
                self.ctx.derived_conditionals_mut(),
            ));
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        self.ctx.enter(kind);
    }

    fn leave_node(&mut self, _kind: AstKind<'a>) {
        self.ctx.leave();
    }

    fn visit_program(&mut self, program: &Program<'a>) {
        walk::walk_program(self, program);
        // gates met before the declaration they read
        if self.config.derived_conditional_naming {
            let rule = DerivedConditionalNaming::new();
            self.diagnostics
                .extend(rule.finish(self.ctx.derived_conditionals_mut()));
        }
    }

    fn visit_binding_identifier(&mut self, ident: &BindingIdentifier<'a>) {
        if self.config.derived_conditional_naming
            && is_variable_or_parameter_binding(self.ctx.ancestors())
        {
            let rule = DerivedConditionalNaming::new();
            let scope = self.current_scope();
            rule.record_binding(ident, scope, self.ctx.derived_conditionals_mut());
        }
        walk::walk_binding_identifier(self, ident);
    }

    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        self.check_variable_declarator(decl);
        walk::walk_variable_declarator(self, decl);
    }

    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        // Function expressions are checked through their declarator
        if self.config.prop_interface_naming && func.is_declaration() {
            let rule = PropInterfaceNaming::new();
            self.diagnostics
                .extend(rule.check_function(func, self.ctx.source_text()));
        }
        walk::walk_function(self, func, flags);
    }

    fn visit_formal_parameter(&mut self, param: &FormalParameter<'a>) {
        if let Some(rule) = &self.config.boolean_naming {
            self.diagnostics.extend(rule.check_formal_parameter(param));
        }
        walk::walk_formal_parameter(self, param);
    }

    fn visit_object_property(&mut self, property: &ObjectProperty<'a>) {
        if let Some(rule) = &self.config.boolean_naming {
            self.diagnostics
                .extend(rule.check_object_property(property, self.ctx.ancestors()));
        }
        walk::walk_object_property(self, property);
    }

    fn visit_ts_signature(&mut self, signature: &TSSignature<'a>) {
        self.check_ts_signature(signature);
        walk::walk_ts_signature(self, signature);
    }

    fn visit_jsx_opening_element(&mut self, opening: &JSXOpeningElement<'a>) {
        self.check_jsx_opening_element(opening);
        walk::walk_jsx_opening_element(self, opening);
    }

    fn visit_jsx_expression_container(&mut self, container: &JSXExpressionContainer<'a>) {
        self.check_jsx_expression_container(container);
        walk::walk_jsx_expression_container(self, container);
    }

    fn visit_logical_expression(&mut self, logical: &LogicalExpression<'a>) {
        self.check_logical_expression(logical);
        walk::walk_logical_expression(self, logical);
    }

    fn visit_conditional_expression(&mut self, conditional: &ConditionalExpression<'a>) {
        self.check_conditional_expression(conditional);
        walk::walk_conditional_expression(self, conditional);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }

    /// Diagnostics reported by one rule, in source order of discovery
    pub fn diagnostics_for(&self, rule: &str) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.rule == rule).collect()
    }

    /// Apply every suggested fix to `source_text`
    pub fn apply_fixes(&self, source_text: &str) -> String {
        crate::diagnostic::Fix::apply(
            source_text,
            self.diagnostics.iter().flat_map(|d| d.fixes.iter()),
        )
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::tsx());
    let config = RulesConfig::default();
    LintRunner::new(ctx, config).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}
