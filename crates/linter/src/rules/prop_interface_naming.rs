//! prop-interface-naming
//!
//! Require a component's props type to be named after the component:
//! `Button` takes `ButtonProps`. Components named `*Component` may also drop
//! that suffix (`UserComponent` takes `UserProps`).

use oxc_ast::ast::{Function, VariableDeclarator};
use tracing::trace;

use common::{resolve_component, ComponentDeclaration, ComponentDescriptor, DeclarationKind};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Props type of `{{name}}` is `{{actual}}`; name it `{{expected}}`.";

/// prop-interface-naming rule
#[derive(Debug, Clone, Default)]
pub struct PropInterfaceNaming;

impl RuleMeta for PropInterfaceNaming {
    const NAME: &'static str = "prop-interface-naming";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl PropInterfaceNaming {
    pub fn new() -> Self {
        Self
    }

    /// `function Button({ label }: ButtonOptions) {}`
    pub fn check_function<'a>(&self, func: &Function<'a>, source_text: &str) -> Vec<Diagnostic> {
        self.check_declaration(ComponentDeclaration::Function(func), source_text)
    }

    /// `const Button = memo(({ label }: ButtonOptions) => ...)`
    pub fn check_variable_declarator<'a>(&self, decl: &VariableDeclarator<'a>, source_text: &str) -> Vec<Diagnostic> {
        self.check_declaration(ComponentDeclaration::Variable(decl), source_text)
    }

    fn check_declaration(&self, decl: ComponentDeclaration<'_, '_>, source_text: &str) -> Vec<Diagnostic> {
        let Some(descriptor) = resolve_component(decl, source_text) else {
            return Vec::new();
        };
        if descriptor.kind != DeclarationKind::Component {
            return Vec::new();
        }
        trace!(
            component = %descriptor.name,
            props = ?descriptor.declared_param_type.as_ref().map(|t| t.name.as_str()),
            "resolved component"
        );
        Self::report(&descriptor).into_iter().collect()
    }

    fn report(descriptor: &ComponentDescriptor) -> Option<Diagnostic> {
        if descriptor.props_type_is_compliant()? {
            return None;
        }
        let declared = descriptor.declared_param_type.as_ref()?;
        Some(
            Diagnostic::warning(Self::NAME, declared.span, MESSAGE)
                .with_data("name", descriptor.name.as_str())
                .with_data("actual", declared.name.as_str())
                .with_data("expected", descriptor.expected_props_name()),
        )
    }
}
