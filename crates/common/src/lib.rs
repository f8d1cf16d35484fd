//! Shared analysis core for the JSX convention rules: expression classification,
//! structural complexity, component resolution, naming conventions and
//! ancestor-context probes.

pub mod classify;
pub mod complexity;
pub mod component;
pub mod constants;
pub mod expression;
pub mod naming;
pub mod probe;

pub use classify::{classify, ExpressionClassification};
pub use complexity::{complexity_violation, ComplexityScore, ComplexityViolation};
pub use component::{
    resolve_component, ComponentDeclaration, ComponentDescriptor, DeclarationKind, ParamTypeName,
    ParamTypeSource,
};
pub use constants::*;
pub use expression::{expr_to_string, peel, span_text};
pub use naming::{HandlerRole, NamingDecision};
pub use probe::{contains_jsx, is_inside_call_named, is_inside_new_expression};
