//! Naming-convention checks and register-preserving rename suggestions.
//!
//! A name lives in one of three registers: `camelCase`, `UPPER_SNAKE_CASE`
//! or `_underscorePrefixed`. A suggested rename stays in the register of the
//! original name.

use crate::constants::{HANDLER_SUFFIXES, PAST_TENSE_EVENTS};

/// Outcome of checking one identifier against a set of prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingDecision {
    pub current_name: String,
    pub allowed_prefixes: Vec<String>,
    pub is_compliant: bool,
    pub suggested_name: Option<String>,
}

impl NamingDecision {
    pub fn for_prefixes<S: AsRef<str>>(name: &str, allowed_prefixes: &[S]) -> Self {
        let is_compliant = is_compliant(name, allowed_prefixes);
        Self {
            current_name: name.to_string(),
            allowed_prefixes: allowed_prefixes
                .iter()
                .map(|prefix| prefix.as_ref().to_string())
                .collect(),
            is_compliant,
            suggested_name: (!is_compliant).then(|| suggest(name, allowed_prefixes)),
        }
    }
}

fn starts_with_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Uppercase the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `IS_OPEN`, `MAX_2`: only uppercase letters, digits and underscores
pub fn is_upper_snake_case(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Check one prefix in all three registers
pub fn matches_prefix(name: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    let camel = name
        .strip_prefix(prefix)
        .is_some_and(starts_with_uppercase);
    let upper = name
        .strip_prefix(&format!("{}_", prefix.to_uppercase()))
        .is_some_and(|rest| !rest.is_empty());
    let underscored = name
        .strip_prefix('_')
        .and_then(|rest| rest.strip_prefix(prefix))
        .is_some_and(starts_with_uppercase);
    camel || upper || underscored
}

/// Compliant if any allowed prefix matches
pub fn is_compliant<S: AsRef<str>>(name: &str, allowed_prefixes: &[S]) -> bool {
    allowed_prefixes
        .iter()
        .any(|prefix| matches_prefix(name, prefix.as_ref()))
}

/// Suggest a compliant name using the first non-empty allowed prefix.
///
/// Compliant names are returned unchanged, so applying the suggestion twice
/// gives the same result. Leading `_`, `$` and digits are dropped from the
/// stem (`$visible` becomes `isVisible`); a leading `_` keeps the underscore
/// register.
pub fn suggest<S: AsRef<str>>(name: &str, allowed_prefixes: &[S]) -> String {
    let Some(prefix) = allowed_prefixes
        .iter()
        .map(AsRef::as_ref)
        .find(|prefix| !prefix.is_empty())
    else {
        return name.to_string();
    };
    if is_compliant(name, allowed_prefixes) {
        return name.to_string();
    }
    if is_upper_snake_case(name) {
        return format!("{}_{}", prefix.to_uppercase(), name);
    }

    let stem = match name.trim_start_matches(|c: char| !(c.is_lowercase() || c.is_uppercase())) {
        "" => "Value",
        stem => stem,
    };
    if name.starts_with('_') {
        format!("_{}{}", prefix, capitalize(stem))
    } else {
        format!("{}{}", prefix, capitalize(stem))
    }
}

/// Underscore convention: compliant iff the name starts with `_`
pub fn is_underscore_prefixed(name: &str) -> bool {
    name.starts_with('_')
}

/// Prepend `_` unless already present
pub fn suggest_underscore(name: &str) -> String {
    if is_underscore_prefixed(name) {
        name.to_string()
    } else {
        format!("_{name}")
    }
}

/// Which side of a component boundary a handler lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerRole {
    /// Declared inside a component: `handleClick`
    Internal,
    /// Exposed through props: `onClick`
    Prop,
}

impl HandlerRole {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Internal => "handle",
            Self::Prop => "on",
        }
    }
}

fn strip_camel_prefix<'s>(name: &'s str, prefix: &str) -> Option<&'s str> {
    name.strip_prefix(prefix).filter(|rest| starts_with_uppercase(rest))
}

/// Names that read as event handlers: `handleX`, `onX`, `xHandler`, `xCallback`
pub fn is_handler_like_name(name: &str) -> bool {
    strip_camel_prefix(name, "handle").is_some()
        || strip_camel_prefix(name, "on").is_some()
        || ["Handler", "Callback"]
            .iter()
            .any(|suffix| name.strip_suffix(suffix).is_some_and(|rest| !rest.is_empty()))
}

/// Recover the event a handler responds to: `handleSaveClicked` -> `SaveClick`
pub fn event_name(name: &str) -> Option<String> {
    let mut event = strip_camel_prefix(name, "handle")
        .or_else(|| strip_camel_prefix(name, "on"))
        .unwrap_or(name);

    if let Some(stripped) = HANDLER_SUFFIXES
        .iter()
        .find_map(|suffix| event.strip_suffix(suffix).filter(|rest| !rest.is_empty()))
    {
        event = stripped;
    }

    let mut event = event.to_string();
    if let Some((past, present)) = PAST_TENSE_EVENTS
        .iter()
        .find(|(past, _)| event.ends_with(past) && event.len() > past.len())
    {
        event.truncate(event.len() - past.len());
        event.push_str(present);
    }

    if event.is_empty() {
        None
    } else {
        Some(capitalize(&event))
    }
}

/// The conventional name for a handler in the given role
pub fn expected_handler_name(name: &str, role: HandlerRole) -> Option<String> {
    event_name(name).map(|event| format!("{}{}", role.prefix(), event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_compliance_registers() {
        assert!(is_compliant("isVisible", &["is"]));
        assert!(is_compliant("IS_VISIBLE", &["is"]));
        assert!(is_compliant("_isVisible", &["is"]));
        assert!(!is_compliant("isvisible", &["is"]));
        assert!(!is_compliant("visible", &["is"]));
        assert!(!is_compliant("is", &["is"]));
        assert!(!is_compliant("IS_", &["is"]));
        assert!(is_compliant("hasItems", &["is", "has"]));
    }

    #[test]
    fn test_suggestion_keeps_register() {
        assert_eq!(suggest("visible", &["is"]), "isVisible");
        assert_eq!(suggest("VISIBLE", &["is"]), "IS_VISIBLE");
        assert_eq!(suggest("MAX_2", &["has"]), "HAS_MAX_2");
        assert_eq!(suggest("_visible", &["is"]), "_isVisible");
        assert_eq!(suggest("loading", &["should", "is"]), "shouldLoading");
    }

    #[test]
    fn test_suggestion_is_idempotent() {
        let names = [
            "visible", "VISIBLE", "_visible", "isvisible", "is", "Open", "_X", "a_b", "$x", "_",
            "__x", "_$x", "$visible", "__proto",
        ];
        for name in names {
            for prefix in ["is", "has", "can"] {
                let once = suggest(name, &[prefix]);
                assert!(matches_prefix(&once, prefix), "{name} -> {once}");
                assert_eq!(suggest(&once, &[prefix]), once);
            }
        }
    }

    #[test]
    fn test_suggestion_drops_leading_symbols() {
        assert_eq!(suggest("$visible", &["is"]), "isVisible");
        assert_eq!(suggest("_", &["is"]), "_isValue");
        assert_eq!(suggest("__proto", &["is"]), "_isProto");
        assert_eq!(suggest("_$x", &["is"]), "_isX");
        assert_eq!(suggest("visible", &["", "has"]), "hasVisible");
        assert_eq!(suggest("visible", &[""]), "visible");
    }

    #[test]
    fn test_naming_decision() {
        let prefixes = vec!["is".to_string()];
        let decision = NamingDecision::for_prefixes("visible", &prefixes);
        assert!(!decision.is_compliant);
        assert_eq!(decision.suggested_name.as_deref(), Some("isVisible"));

        let decision = NamingDecision::for_prefixes("isOpen", &prefixes);
        assert!(decision.is_compliant);
        assert_eq!(decision.suggested_name, None);
    }

    #[test]
    fn test_underscore_round_trip() {
        for name in ["hasError", "_hasError", "", "__x", "X"] {
            assert!(is_underscore_prefixed(&suggest_underscore(name)));
        }
        assert_eq!(suggest_underscore("hasError"), "_hasError");
        assert_eq!(suggest_underscore("_hasError"), "_hasError");
    }

    #[test]
    fn test_handler_like_names() {
        assert!(is_handler_like_name("handleClick"));
        assert!(is_handler_like_name("onClick"));
        assert!(is_handler_like_name("clickHandler"));
        assert!(is_handler_like_name("saveCallback"));
        assert!(!is_handler_like_name("online"));
        assert!(!is_handler_like_name("handler"));
        assert!(!is_handler_like_name("Handler"));
        assert!(!is_handler_like_name("submit"));
    }

    #[test]
    fn test_event_name() {
        assert_eq!(event_name("handleClick").as_deref(), Some("Click"));
        assert_eq!(event_name("onValueChanged").as_deref(), Some("ValueChange"));
        assert_eq!(event_name("clickHandler").as_deref(), Some("Click"));
        assert_eq!(event_name("onSubmitCallback").as_deref(), Some("Submit"));
        assert_eq!(event_name("handleButtonPressed").as_deref(), Some("ButtonPress"));
        assert_eq!(event_name("saveFn").as_deref(), Some("Save"));
        assert_eq!(event_name("closeFunction").as_deref(), Some("Close"));
        assert_eq!(event_name("Changed").as_deref(), Some("Changed"));
    }

    #[test]
    fn test_expected_handler_name() {
        assert_eq!(
            expected_handler_name("onClick", HandlerRole::Internal).as_deref(),
            Some("handleClick")
        );
        assert_eq!(
            expected_handler_name("handleClick", HandlerRole::Prop).as_deref(),
            Some("onClick")
        );
        assert_eq!(
            expected_handler_name("onItemClicked", HandlerRole::Prop).as_deref(),
            Some("onItemClick")
        );
        assert_eq!(
            expected_handler_name("onClick", HandlerRole::Prop).as_deref(),
            Some("onClick")
        );
    }
}
