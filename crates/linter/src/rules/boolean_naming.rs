//! boolean-naming
//!
//! Require boolean variables, properties and parameters to carry a boolean
//! prefix (`isOpen`, `IS_OPEN`, `_isOpen`).

use oxc_ast::ast::{
    Expression, FormalParameter, ObjectProperty, PropertyKind, TSPropertySignature,
    VariableDeclarator,
};
use oxc_ast::AstKind;
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};

use common::classify::{is_boolean, is_string_fallback};
use common::expression::is_boolean_type;
use common::probe::{is_inside_call_named, is_inside_new_expression};
use common::{NamingDecision, SCHEMA_SELECTOR_METHODS};

use crate::diagnostic::Diagnostic;
use crate::utils::property_key_name;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str =
    "Boolean {{context}} `{{name}}` should start with one of: {{prefixes}}. Consider renaming it to `{{suggested}}`.";

const DEFAULT_PREFIX: &str = "is";

/// Configuration for boolean-naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BooleanNamingConfig {
    /// Accepted prefixes; the first one is used for suggestions
    pub allowed_prefixes: Vec<String>,
    /// Methods whose object argument selects fields with `true` (`schema.pick({ id: true })`)
    pub schema_methods: Vec<String>,
}

impl Default for BooleanNamingConfig {
    fn default() -> Self {
        Self {
            allowed_prefixes: vec![DEFAULT_PREFIX.to_string()],
            schema_methods: SCHEMA_SELECTOR_METHODS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// What kind of binding carries the boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanBinding {
    Variable,
    Property,
    Parameter,
}

impl BooleanBinding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Property => "property",
            Self::Parameter => "parameter",
        }
    }
}

/// boolean-naming rule
#[derive(Debug, Clone, Default)]
pub struct BooleanNaming {
    pub config: BooleanNamingConfig,
}

impl RuleMeta for BooleanNaming {
    const NAME: &'static str = "boolean-naming";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

/// A boolean value that is not the `value || 'default'` idiom
fn is_boolean_value(expr: &Expression<'_>) -> bool {
    is_boolean(expr) && !is_string_fallback(expr)
}

impl BooleanNaming {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BooleanNamingConfig) -> Self {
        Self { config }
    }

    pub fn with_allowed_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.config.allowed_prefixes = prefixes;
        self
    }

    /// `const visible = true;` or `let open: boolean;`
    pub fn check_variable_declarator<'a>(&self, decl: &VariableDeclarator<'a>) -> Vec<Diagnostic> {
        let Some(ident) = decl.id.get_binding_identifier() else {
            return Vec::new();
        };
        let typed_boolean = decl
            .type_annotation
            .as_ref()
            .is_some_and(|annotation| is_boolean_type(&annotation.type_annotation));
        let valued_boolean = decl.init.as_ref().is_some_and(is_boolean_value);

        if typed_boolean || valued_boolean {
            self.check_name(&ident.name, ident.span, BooleanBinding::Variable)
        } else {
            Vec::new()
        }
    }

    /// `interface Props { disabled: boolean }`
    pub fn check_property_signature<'a>(&self, signature: &TSPropertySignature<'a>) -> Vec<Diagnostic> {
        let typed_boolean = signature
            .type_annotation
            .as_ref()
            .is_some_and(|annotation| is_boolean_type(&annotation.type_annotation));
        if !typed_boolean {
            return Vec::new();
        }
        match property_key_name(&signature.key) {
            Some(name) => self.check_name(&name, signature.key.span(), BooleanBinding::Property),
            None => Vec::new(),
        }
    }

    /// `{ active: true }`, except field selectors like `schema.pick({ id: true })`
    /// and constructor options like `new Client({ retry: true })`
    pub fn check_object_property<'a>(
        &self,
        property: &ObjectProperty<'a>,
        ancestors: &[AstKind<'a>],
    ) -> Vec<Diagnostic> {
        if property.kind != PropertyKind::Init || property.method || property.computed {
            return Vec::new();
        }
        if !is_boolean_value(&property.value) {
            return Vec::new();
        }
        if is_inside_call_named(ancestors, &self.config.schema_methods)
            || is_inside_new_expression(ancestors)
        {
            return Vec::new();
        }
        match property_key_name(&property.key) {
            Some(name) => self.check_name(&name, property.key.span(), BooleanBinding::Property),
            None => Vec::new(),
        }
    }

    /// `function toggle(open: boolean)`
    pub fn check_formal_parameter<'a>(&self, param: &FormalParameter<'a>) -> Vec<Diagnostic> {
        let Some(ident) = param.pattern.get_binding_identifier() else {
            return Vec::new();
        };
        let typed_boolean = param
            .type_annotation
            .as_ref()
            .is_some_and(|annotation| is_boolean_type(&annotation.type_annotation));
        if typed_boolean {
            self.check_name(&ident.name, ident.span, BooleanBinding::Parameter)
        } else {
            Vec::new()
        }
    }

    fn check_name(&self, name: &str, span: Span, binding: BooleanBinding) -> Vec<Diagnostic> {
        let mut prefixes: Vec<&str> = self
            .config
            .allowed_prefixes
            .iter()
            .map(String::as_str)
            .filter(|prefix| !prefix.is_empty())
            .collect();
        // an empty list would make every boolean unfixable
        if prefixes.is_empty() {
            prefixes.push(DEFAULT_PREFIX);
        }
        let decision = NamingDecision::for_prefixes(name, &prefixes);
        let Some(suggested) = decision.suggested_name else {
            return Vec::new();
        };

        vec![Diagnostic::warning(Self::NAME, span, MESSAGE)
            .with_data("context", binding.as_str())
            .with_data("name", decision.current_name)
            .with_data("suggested", suggested)
            .with_data("prefixes", decision.allowed_prefixes.join(", "))]
    }
}
