use phf::phf_set;

/// Verbs that make an identifier read as a boolean (`isOpen`, `hasError`, ...)
pub static BOOLEAN_VERBS: phf::Set<&'static str> = phf_set! {
    "is", "has", "can", "should", "will", "does", "did",
    "was", "were", "am", "are", "be",
};

/// Suffixes conventionally used for a component's parameter contract
pub const PROPS_LIKE_SUFFIXES: &[&str] = &["Props", "Options", "Config", "Settings"];

/// Helpers whose generic arguments are `<RefElement, Props>`
pub static FORWARD_REF_HELPERS: phf::Set<&'static str> = phf_set! {
    "forwardRef",
};

/// Hook wrappers that return the handler they are given
pub static CALLBACK_WRAPPERS: phf::Set<&'static str> = phf_set! {
    "useCallback",
    "useEvent",
    "useEffectEvent",
};

/// Schema-builder methods whose object argument selects fields by `true`
pub const SCHEMA_SELECTOR_METHODS: &[&str] = &["pick", "omit"];

/// JSX props that gate rendering of their element
pub static GATING_PROPS: phf::Set<&'static str> = phf_set! {
    "condition",
    "when",
    "if",
};

/// Suffixes stripped from a handler identifier to recover the event name
pub const HANDLER_SUFFIXES: &[&str] = &["Handler", "Callback", "Function", "Fn"];

/// Past-tense endings rewritten to the event they describe
pub const PAST_TENSE_EVENTS: &[(&str, &str)] = &[
    ("Changed", "Change"),
    ("Clicked", "Click"),
    ("Pressed", "Press"),
];
