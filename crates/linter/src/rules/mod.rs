//! JSX naming and style convention rules

pub mod boolean_naming;
pub mod derived_conditional_naming;
pub mod event_handler_naming;
pub mod jsx_string_braces;
pub mod no_complex_jsx_conditions;
pub mod no_inline_styles;
pub mod prop_interface_naming;

// Re-export rule structs
pub use boolean_naming::{BooleanNaming, BooleanNamingConfig};
pub use derived_conditional_naming::DerivedConditionalNaming;
pub use event_handler_naming::EventHandlerNaming;
pub use jsx_string_braces::JsxStringBraces;
pub use no_complex_jsx_conditions::NoComplexJsxConditions;
pub use no_inline_styles::{NoInlineStyles, NoInlineStylesConfig};
pub use prop_interface_naming::PropInterfaceNaming;
