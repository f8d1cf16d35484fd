//! Per-traversal state shared by the rules

use oxc_ast::AstKind;
use oxc_span::{SourceType, Span};
use rustc_hash::FxHashMap;

/// What a name is bound to within one scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindingState {
    /// A derived conditional not yet seen gating JSX
    Pending,
    /// A derived conditional already reported
    Reported,
    /// Any other variable or parameter
    Plain,
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    span: Span,
    state: BindingState,
}

/// How a name used in a JSX gate resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateResolution {
    /// A derived conditional, handed out once with its declaring span
    Derived(Span),
    /// Bound to something else, or already reported
    Other,
    /// No binding seen yet in any enclosing scope
    Unbound,
}

/// Bindings seen so far in the file, keyed by name and the span of the
/// enclosing function (or program) that declares them
#[derive(Debug, Default)]
pub struct DerivedConditionals {
    bindings: FxHashMap<(String, Span), Binding>,
    deferred: Vec<(String, Vec<Span>)>,
}

impl DerivedConditionals {
    /// Remember a derived conditional. A later declaration with the same name
    /// in the same scope replaces it.
    pub fn record(&mut self, name: impl Into<String>, scope: Span, span: Span) {
        self.bindings
            .insert((name.into(), scope), Binding { span, state: BindingState::Pending });
    }

    /// Remember a variable or parameter that is not a derived conditional.
    /// The binding already recorded for the same identifier is kept.
    pub fn bind_plain(&mut self, name: impl Into<String>, scope: Span, span: Span) {
        let key = (name.into(), scope);
        if self.bindings.get(&key).is_some_and(|binding| binding.span == span) {
            return;
        }
        self.bindings
            .insert(key, Binding { span, state: BindingState::Plain });
    }

    /// Resolve `name` through `scopes` (innermost first). The nearest binding
    /// wins; a derived conditional is handed out once.
    pub fn consume(&mut self, name: &str, scopes: &[Span]) -> GateResolution {
        for scope in scopes {
            let Some(binding) = self.bindings.get_mut(&(name.to_string(), *scope)) else {
                continue;
            };
            return match binding.state {
                BindingState::Pending => {
                    binding.state = BindingState::Reported;
                    GateResolution::Derived(binding.span)
                }
                BindingState::Reported | BindingState::Plain => GateResolution::Other,
            };
        }
        GateResolution::Unbound
    }

    /// Keep a gate whose name is declared later (`const render = () => ok && <A />; const ok = ...`)
    pub fn defer(&mut self, name: impl Into<String>, scopes: Vec<Span>) {
        self.deferred.push((name.into(), scopes));
    }

    pub fn take_deferred(&mut self) -> Vec<(String, Vec<Span>)> {
        std::mem::take(&mut self.deferred)
    }

    /// Whether `name` is a pending derived conditional in `scope`
    pub fn contains(&self, name: &str, scope: Span) -> bool {
        self.bindings
            .get(&(name.to_string(), scope))
            .is_some_and(|binding| binding.state == BindingState::Pending)
    }

    /// Number of derived conditionals not yet reported
    pub fn len(&self) -> usize {
        self.bindings
            .values()
            .filter(|binding| binding.state == BindingState::Pending)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Context passed to rules during linting
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Source type (JS/TS/JSX etc)
    source_type: SourceType,
    /// Nodes enclosing the one being visited, outermost first
    ancestors: Vec<AstKind<'a>>,
    derived_conditionals: DerivedConditionals,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, source_type: SourceType) -> Self {
        Self {
            source_text,
            source_type,
            ancestors: Vec::new(),
            derived_conditionals: DerivedConditionals::default(),
        }
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Check if the source is TypeScript
    pub fn is_typescript(&self) -> bool {
        self.source_type.is_typescript()
    }

    pub fn ancestors(&self) -> &[AstKind<'a>] {
        &self.ancestors
    }

    pub(crate) fn enter(&mut self, kind: AstKind<'a>) {
        self.ancestors.push(kind);
    }

    pub(crate) fn leave(&mut self) {
        self.ancestors.pop();
    }

    pub fn derived_conditionals(&self) -> &DerivedConditionals {
        &self.derived_conditionals
    }

    pub fn derived_conditionals_mut(&mut self) -> &mut DerivedConditionals {
        &mut self.derived_conditionals
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: Span) -> &'a str {
        common::span_text(self.source_text, span)
    }
}
