//! event-handler-naming
//!
//! Handlers declared inside a component or hook are named `handle{Event}`;
//! handlers received through props are named `on{Event}`.

use oxc_ast::ast::{PropertyKey, TSMethodSignature, TSPropertySignature, VariableDeclarator};
use oxc_ast::AstKind;
use oxc_span::{GetSpan, Span};

use common::classify::is_event_handler_shaped;
use common::component::is_props_like_name;
use common::expression::is_function_type;
use common::naming::{expected_handler_name, is_handler_like_name};
use common::probe::{enclosing_function_kind, enclosing_type_name};
use common::HandlerRole;

use crate::diagnostic::Diagnostic;
use crate::utils::property_key_name;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Event {{context}} `{{name}}` should be named `{{suggested}}`.";

fn role_context(role: HandlerRole) -> &'static str {
    match role {
        HandlerRole::Internal => "handler",
        HandlerRole::Prop => "handler prop",
    }
}

/// event-handler-naming rule
#[derive(Debug, Clone, Default)]
pub struct EventHandlerNaming;

impl RuleMeta for EventHandlerNaming {
    const NAME: &'static str = "event-handler-naming";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl EventHandlerNaming {
    pub fn new() -> Self {
        Self
    }

    /// `const onSave = () => {}` inside a component should be `handleSave`
    pub fn check_variable_declarator<'a>(
        &self,
        decl: &VariableDeclarator<'a>,
        ancestors: &[AstKind<'a>],
    ) -> Vec<Diagnostic> {
        let Some(ident) = decl.id.get_binding_identifier() else {
            return Vec::new();
        };
        let Some(init) = &decl.init else {
            return Vec::new();
        };
        if !is_event_handler_shaped(init) || !is_handler_like_name(&ident.name) {
            return Vec::new();
        }
        let in_component = enclosing_function_kind(ancestors).is_some_and(|kind| kind.is_component_or_hook());
        if !in_component {
            return Vec::new();
        }
        self.check_name(&ident.name, ident.span, HandlerRole::Internal)
    }

    /// `handleClick: () => void` in `ButtonProps` should be `onClick`
    pub fn check_property_signature<'a>(
        &self,
        signature: &TSPropertySignature<'a>,
        ancestors: &[AstKind<'a>],
    ) -> Vec<Diagnostic> {
        let is_callback = signature
            .type_annotation
            .as_ref()
            .is_some_and(|annotation| is_function_type(&annotation.type_annotation));
        if !is_callback {
            return Vec::new();
        }
        self.check_prop(&signature.key, ancestors)
    }

    /// `handleClick(): void` in `ButtonProps` should be `onClick`
    pub fn check_method_signature<'a>(
        &self,
        signature: &TSMethodSignature<'a>,
        ancestors: &[AstKind<'a>],
    ) -> Vec<Diagnostic> {
        self.check_prop(&signature.key, ancestors)
    }

    fn check_prop<'a>(&self, key: &PropertyKey<'a>, ancestors: &[AstKind<'a>]) -> Vec<Diagnostic> {
        if !enclosing_type_name(ancestors).is_some_and(is_props_like_name) {
            return Vec::new();
        }
        let Some(name) = property_key_name(key) else {
            return Vec::new();
        };
        if !is_handler_like_name(&name) {
            return Vec::new();
        }
        self.check_name(&name, key.span(), HandlerRole::Prop)
    }

    fn check_name(&self, name: &str, span: Span, role: HandlerRole) -> Vec<Diagnostic> {
        let Some(expected) = expected_handler_name(name, role) else {
            return Vec::new();
        };
        if expected == name {
            return Vec::new();
        }
        vec![Diagnostic::warning(Self::NAME, span, MESSAGE)
            .with_data("context", role_context(role))
            .with_data("name", name)
            .with_data("suggested", expected)]
    }
}
