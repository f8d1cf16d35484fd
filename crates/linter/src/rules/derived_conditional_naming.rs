//! derived-conditional-naming
//!
//! A boolean computed from other values and then used to gate JSX should be
//! underscore-prefixed, marking it as a local render condition:
//!
//! ```tsx
//! const _hasError = error || validationError;
//! return <>{_hasError && <ErrorMessage />}</>;
//! ```
//!
//! Declarations are recorded per enclosing function as the traversal meets
//! them; a diagnostic is only produced once a recorded name is used to render
//! JSX. A gate resolves to the nearest binding of its name, so a parameter or
//! plain variable of an inner function shadows an outer declaration. Gates
//! that run before the declaration they read (in a closure, say) are resolved
//! once the whole file has been seen.

use oxc_ast::ast::{BindingIdentifier, Expression, VariableDeclarator};
use oxc_span::Span;
use tracing::trace;

use common::classify::{is_boolean_like_name, is_combining_logical, is_derived};
use common::naming::{is_underscore_prefixed, suggest_underscore};
use common::probe::gating_identifiers;

use crate::context::{DerivedConditionals, GateResolution};
use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str =
    "Derived condition `{{name}}` is used to render JSX; prefix it with an underscore: `{{suggested}}`.";

/// derived-conditional-naming rule
#[derive(Debug, Clone, Default)]
pub struct DerivedConditionalNaming;

impl RuleMeta for DerivedConditionalNaming {
    const NAME: &'static str = "derived-conditional-naming";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl DerivedConditionalNaming {
    pub fn new() -> Self {
        Self
    }

    /// Whether `name = init` declares a derived conditional
    pub fn is_candidate(name: &str, init: &Expression<'_>) -> bool {
        is_derived(init) || (is_combining_logical(init) && is_boolean_like_name(name))
    }

    /// Record a declarator whose initializer derives a condition.
    /// Names that already follow the convention are not tracked.
    pub fn record_declarator<'a>(
        &self,
        decl: &VariableDeclarator<'a>,
        scope: Span,
        derived: &mut DerivedConditionals,
    ) {
        let Some(ident) = decl.id.get_binding_identifier() else {
            return;
        };
        let Some(init) = &decl.init else {
            return;
        };
        if is_underscore_prefixed(&ident.name) || !Self::is_candidate(&ident.name, init) {
            return;
        }
        trace!(name = %ident.name, "recorded derived conditional");
        derived.record(ident.name.as_str(), scope, ident.span);
    }

    /// Record any other variable or parameter, which hides outer declarations
    pub fn record_binding<'a>(
        &self,
        ident: &BindingIdentifier<'a>,
        scope: Span,
        derived: &mut DerivedConditionals,
    ) {
        derived.bind_plain(ident.name.as_str(), scope, ident.span);
    }

    /// Report recorded declarations used in a condition that gates JSX.
    /// `scopes` lists the enclosing functions, innermost first.
    pub fn check_gate<'a>(
        &self,
        condition: &Expression<'a>,
        scopes: &[Span],
        derived: &mut DerivedConditionals,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for name in gating_identifiers(condition) {
            match derived.consume(name, scopes) {
                GateResolution::Derived(span) => {
                    trace!(name, "derived conditional gates JSX");
                    diagnostics.push(Self::diagnostic(name, span));
                }
                GateResolution::Unbound => derived.defer(name, scopes.to_vec()),
                GateResolution::Other => {}
            }
        }
        diagnostics
    }

    /// Resolve gates that were met before their declaration
    pub fn finish(&self, derived: &mut DerivedConditionals) -> Vec<Diagnostic> {
        derived
            .take_deferred()
            .into_iter()
            .filter_map(|(name, scopes)| match derived.consume(&name, &scopes) {
                GateResolution::Derived(span) => {
                    trace!(name = %name, "derived conditional gates JSX before its declaration");
                    Some(Self::diagnostic(&name, span))
                }
                GateResolution::Other | GateResolution::Unbound => None,
            })
            .collect()
    }

    fn diagnostic(name: &str, span: Span) -> Diagnostic {
        Diagnostic::warning(Self::NAME, span, MESSAGE)
            .with_data("name", name)
            .with_data("suggested", suggest_underscore(name))
    }
}
