//! Component and hook declarations, and the props type bound to their first parameter.
//!
//! The props type of a component can be written in several places:
//!
//! ```tsx
//! function Button({ label }: ButtonProps) {}
//! const Button = ({ label }: ButtonProps) => {};
//! const Button = memo(forwardRef(({ label }: ButtonProps, ref) => {}));
//! const Button: FC<WithTheme<ButtonProps>> = ({ label }) => {};
//! const Button = forwardRef<HTMLButtonElement, ButtonProps>((props, ref) => {});
//! ```
//!
//! Each place is a [`ParamTypeShape`]; they are tried in that order and the first
//! one that names a type wins. Inline object types are never reported.

use oxc_ast::ast::{
    Argument, ArrowFunctionExpression, CallExpression, Expression, FormalParameter,
    FormalParameters, Function, TSType, TSTypeName, TSTypeReference, VariableDeclarator,
};
use oxc_span::Span;

use crate::constants::{FORWARD_REF_HELPERS, PROPS_LIKE_SUFFIXES};
use crate::expression::{peel, span_text, type_name_to_string};

/// What a declaration's name says about it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// Capitalized name: a UI component
    Component,
    /// `use[A-Z]...`: a hook
    Hook,
    Plain,
}

impl DeclarationKind {
    pub fn of_name(name: &str) -> Self {
        if name.chars().next().is_some_and(|c| c.is_uppercase()) {
            Self::Component
        } else if is_hook_name(name) {
            Self::Hook
        } else {
            Self::Plain
        }
    }

    pub fn is_component_or_hook(self) -> bool {
        matches!(self, Self::Component | Self::Hook)
    }
}

/// Check if a name follows the hook convention (`useState`, `useFoo`)
pub fn is_hook_name(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Where the props type name was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamTypeSource {
    /// `({ a }: ButtonProps)` or `(props: ButtonProps)`
    Parameter,
    /// `(props: UI.ButtonProps<"a">)`, rendered as written
    QualifiedParameter,
    /// `const Button: FC<ButtonProps> = ...`
    VariableAnnotation,
    /// `forwardRef<HTMLElement, ButtonProps>(...)`
    ForwardRefGeneric,
}

/// A resolved props type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTypeName {
    pub name: String,
    pub span: Span,
    pub source: ParamTypeSource,
}

/// A function-like declaration with its name and props type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub name: String,
    /// Span of the declared name
    pub span: Span,
    pub kind: DeclarationKind,
    pub declared_param_type: Option<ParamTypeName>,
}

impl ComponentDescriptor {
    /// The props name suggested in messages
    pub fn expected_props_name(&self) -> String {
        expected_props_name(&self.name)
    }

    /// Check the resolved props type against the accepted names.
    /// `None` when no props type could be resolved.
    pub fn props_type_is_compliant(&self) -> Option<bool> {
        let declared = self.declared_param_type.as_ref()?;
        Some(accepted_props_names(&self.name).contains(&declared.name))
    }
}

pub fn expected_props_name(component: &str) -> String {
    format!("{component}Props")
}

/// `ButtonProps`, `MenuOptions`, `ChartConfig`, `EditorSettings`
pub fn is_props_like_name(name: &str) -> bool {
    PROPS_LIKE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// `Button` accepts `ButtonProps`; `UserComponent` accepts both
/// `UserComponentProps` and `UserProps`.
pub fn accepted_props_names(component: &str) -> Vec<String> {
    let mut names = vec![expected_props_name(component)];
    for suffix in ["FunctionComponent", "ComponentFunction", "Component"] {
        if let Some(stripped) = component.strip_suffix(suffix) {
            if !stripped.is_empty() {
                names.push(expected_props_name(stripped));
                break;
            }
        }
    }
    names
}

/// A function or arrow function, however it was declared
#[derive(Debug, Clone, Copy)]
pub enum FunctionLike<'b, 'a> {
    Function(&'b Function<'a>),
    Arrow(&'b ArrowFunctionExpression<'a>),
}

impl<'b, 'a> FunctionLike<'b, 'a> {
    pub fn params(&self) -> &'b FormalParameters<'a> {
        match self {
            Self::Function(func) => &func.params,
            Self::Arrow(arrow) => &arrow.params,
        }
    }

    pub fn first_param(&self) -> Option<&'b FormalParameter<'a>> {
        self.params().items.first()
    }
}

/// Find the function inside `memo(forwardRef((props, ref) => ...))` and similar wrappers
pub fn unwrap_function_like<'b, 'a>(expr: &'b Expression<'a>) -> Option<FunctionLike<'b, 'a>> {
    let mut pending = vec![expr];
    while let Some(current) = pending.pop() {
        match peel(current) {
            Expression::ArrowFunctionExpression(arrow) => return Some(FunctionLike::Arrow(arrow)),
            Expression::FunctionExpression(func) => return Some(FunctionLike::Function(func)),
            Expression::CallExpression(call) => {
                // Leftmost argument first
                pending.extend(call.arguments.iter().rev().filter_map(Argument::as_expression));
            }
            _ => {}
        }
    }
    None
}

/// The places a props type can be written, in priority order
#[derive(Debug, Clone, Copy)]
pub enum ParamTypeShape<'b, 'a> {
    Parameter(&'b FormalParameter<'a>),
    VariableAnnotation(&'b TSType<'a>),
    ForwardRefGeneric(&'b Expression<'a>),
}

impl<'b, 'a> ParamTypeShape<'b, 'a> {
    pub fn resolve(&self, source: &str) -> Option<ParamTypeName> {
        match self {
            Self::Parameter(param) => {
                let annotation = param.type_annotation.as_ref()?;
                reference_name(&annotation.type_annotation, source, ParamTypeSource::Parameter)
            }
            Self::VariableAnnotation(ty) => props_like_generic_argument(ty, source),
            Self::ForwardRefGeneric(init) => {
                let call = find_forward_ref_call(init)?;
                let props = call.type_arguments.as_ref()?.params.get(1)?;
                reference_name(props, source, ParamTypeSource::ForwardRefGeneric)
            }
        }
    }
}

fn reference_name(ty: &TSType<'_>, source: &str, source_kind: ParamTypeSource) -> Option<ParamTypeName> {
    let TSType::TSTypeReference(reference) = ty else {
        return None;
    };
    match &reference.type_name {
        TSTypeName::IdentifierReference(ident) => Some(ParamTypeName {
            name: ident.name.to_string(),
            span: reference.span,
            source: source_kind,
        }),
        TSTypeName::QualifiedName(_) => Some(ParamTypeName {
            name: rendered_reference(reference, source),
            span: reference.span,
            source: ParamTypeSource::QualifiedParameter,
        }),
        _ => None,
    }
}

/// `UI.ButtonProps<"a">` as written; the bare right-hand name is ambiguous
fn rendered_reference(reference: &TSTypeReference<'_>, source: &str) -> String {
    match span_text(source, reference.span) {
        "" => type_name_to_string(&reference.type_name),
        text => text.to_string(),
    }
}

fn reference_display_name(reference: &TSTypeReference<'_>, source: &str) -> String {
    match &reference.type_name {
        TSTypeName::IdentifierReference(ident) => ident.name.to_string(),
        _ => rendered_reference(reference, source),
    }
}

/// Search the generic arguments of `FC<WithTheme<ButtonProps>>` for the props type.
/// Intermediate wrappers are skipped in favor of a props-like suffix.
fn props_like_generic_argument(ty: &TSType<'_>, source: &str) -> Option<ParamTypeName> {
    let mut candidates = Vec::new();
    collect_generic_references(ty, &mut candidates);

    let names: Vec<(String, Span)> = candidates
        .into_iter()
        .map(|reference| (reference_display_name(reference, source), reference.span))
        .collect();

    let (name, span) = names
        .iter()
        .find(|(name, _)| is_props_like_name(name))
        .or_else(|| names.first())
        .cloned()?;

    Some(ParamTypeName {
        name,
        span,
        source: ParamTypeSource::VariableAnnotation,
    })
}

fn collect_generic_references<'b, 'a>(ty: &'b TSType<'a>, out: &mut Vec<&'b TSTypeReference<'a>>) {
    let TSType::TSTypeReference(reference) = ty else {
        return;
    };
    let Some(arguments) = &reference.type_arguments else {
        return;
    };
    for argument in &arguments.params {
        if let TSType::TSTypeReference(inner) = argument {
            out.push(inner);
        }
        collect_generic_references(argument, out);
    }
}

fn callee_name<'b>(callee: &'b Expression<'_>) -> Option<&'b str> {
    match peel(callee) {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        _ => None,
    }
}

/// Walk wrapping calls until one invokes the ref-forwarding helper
fn find_forward_ref_call<'b, 'a>(expr: &'b Expression<'a>) -> Option<&'b CallExpression<'a>> {
    let Expression::CallExpression(call) = peel(expr) else {
        return None;
    };
    if callee_name(&call.callee).is_some_and(|name| FORWARD_REF_HELPERS.contains(name)) {
        return Some(call);
    }
    call.arguments
        .iter()
        .filter_map(Argument::as_expression)
        .find_map(find_forward_ref_call)
}

/// A declaration that may introduce a component or hook
#[derive(Debug, Clone, Copy)]
pub enum ComponentDeclaration<'b, 'a> {
    Function(&'b Function<'a>),
    Variable(&'b VariableDeclarator<'a>),
}

/// Resolve the name, kind and props type of a function-like declaration.
///
/// Returns `None` when the declaration is not function-like or is anonymous.
pub fn resolve_component(decl: ComponentDeclaration<'_, '_>, source: &str) -> Option<ComponentDescriptor> {
    let (ident, shapes) = match decl {
        ComponentDeclaration::Function(func) => {
            let ident = func.id.as_ref()?;
            let shapes: Vec<ParamTypeShape> = FunctionLike::Function(func)
                .first_param()
                .map(ParamTypeShape::Parameter)
                .into_iter()
                .collect();
            (ident, shapes)
        }
        ComponentDeclaration::Variable(declarator) => {
            let ident = declarator.id.get_binding_identifier()?;
            let init = declarator.init.as_ref()?;
            let function = unwrap_function_like(init)?;

            let mut shapes = Vec::with_capacity(3);
            if let Some(param) = function.first_param() {
                shapes.push(ParamTypeShape::Parameter(param));
            }
            if let Some(annotation) = &declarator.type_annotation {
                shapes.push(ParamTypeShape::VariableAnnotation(&annotation.type_annotation));
            }
            shapes.push(ParamTypeShape::ForwardRefGeneric(init));
            (ident, shapes)
        }
    };

    let name = ident.name.to_string();
    Some(ComponentDescriptor {
        kind: DeclarationKind::of_name(&name),
        span: ident.span,
        declared_param_type: shapes.iter().find_map(|shape| shape.resolve(source)),
        name,
    })
}
