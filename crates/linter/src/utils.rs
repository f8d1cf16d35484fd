//! Utility functions for the convention rules

use oxc_ast::ast::{
    JSXAttributeName, JSXElementName, JSXMemberExpressionObject, JSXOpeningElement, PropertyKey,
};
use oxc_ast::AstKind;

/// Get the name of a JSX element as a string
pub fn get_element_name(element: &JSXOpeningElement) -> Option<String> {
    match &element.name {
        JSXElementName::Identifier(ident) => Some(ident.name.to_string()),
        JSXElementName::IdentifierReference(ident) => Some(ident.name.to_string()),
        JSXElementName::NamespacedName(ns) => {
            Some(format!("{}:{}", ns.namespace.name, ns.name.name))
        }
        JSXElementName::MemberExpression(member) => {
            let mut parts = vec![member.property.name.to_string()];
            let mut current = &member.object;
            loop {
                match current {
                    JSXMemberExpressionObject::IdentifierReference(ident) => {
                        parts.push(ident.name.to_string());
                        break;
                    }
                    JSXMemberExpressionObject::MemberExpression(inner) => {
                        parts.push(inner.property.name.to_string());
                        current = &inner.object;
                    }
                    JSXMemberExpressionObject::ThisExpression(_) => {
                        parts.push("this".to_string());
                        break;
                    }
                }
            }
            parts.reverse();
            Some(parts.join("."))
        }
        _ => None,
    }
}

/// `class` or `xlink:href`
pub fn attribute_name(name: &JSXAttributeName) -> String {
    match name {
        JSXAttributeName::Identifier(ident) => ident.name.to_string(),
        JSXAttributeName::NamespacedName(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
    }
}

/// Static name of an object or signature key. Computed keys have none.
pub fn property_key_name(key: &PropertyKey) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.to_string()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.to_string()),
        _ => None,
    }
}

/// Where a JSX expression container sits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerPosition {
    /// `<Tag attribute={...}>`
    Attribute { attribute: String, element: String },
    /// `<Tag>{...}</Tag>`
    Child { element: String },
    /// `<>{...}</>`
    FragmentChild,
}

impl ContainerPosition {
    /// Locate a container from its ancestors (innermost last)
    pub fn of(ancestors: &[AstKind<'_>]) -> Option<Self> {
        let index = ancestors.iter().rposition(|kind| {
            matches!(
                kind,
                AstKind::JSXAttribute(_) | AstKind::JSXElement(_) | AstKind::JSXFragment(_)
            )
        })?;
        match ancestors[index] {
            AstKind::JSXAttribute(attr) => {
                let element = ancestors[..index].iter().rev().find_map(|kind| match kind {
                    AstKind::JSXOpeningElement(opening) => get_element_name(opening),
                    _ => None,
                })?;
                Some(Self::Attribute { attribute: attribute_name(&attr.name), element })
            }
            AstKind::JSXElement(element) => Some(Self::Child {
                element: get_element_name(&element.opening_element)?,
            }),
            AstKind::JSXFragment(_) => Some(Self::FragmentChild),
            _ => None,
        }
    }

    /// Human-readable location used in messages
    pub fn describe(&self) -> String {
        match self {
            Self::Attribute { attribute, element } => format!("the `{attribute}` prop of <{element}>"),
            Self::Child { element } => format!("the children of <{element}>"),
            Self::FragmentChild => "a fragment".to_string(),
        }
    }

    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::Attribute { attribute, .. } => Some(attribute),
            _ => None,
        }
    }
}
