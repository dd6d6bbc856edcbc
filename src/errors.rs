//! Build-time error taxonomy.
//!
//! These errors abort the current `Director::build` call. They are control
//! flow, not user-facing diagnostics; see [`crate::diagnostics`] for the
//! latter.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::NodeKind;

/// Failure while turning a parse-tree fragment into a typed node.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BuildError {
    #[error("fragment is not an object carrying a string `kind`")]
    #[diagnostic(code(graphql::build::malformed_fragment))]
    MalformedFragment,

    #[error("unknown node kind `{kind}`")]
    #[diagnostic(
        code(graphql::build::unknown_node_kind),
        help("no registered builder supports this kind")
    )]
    UnknownNodeKind { kind: String },

    #[error("{kind} is missing required property `{property}`")]
    #[diagnostic(code(graphql::build::missing_required_property))]
    MissingRequiredProperty {
        kind: NodeKind,
        property: &'static str,
    },

    #[error("{kind}.{property} has an invalid value: expected {expected}")]
    #[diagnostic(code(graphql::build::invalid_property_value))]
    InvalidPropertyValue {
        kind: NodeKind,
        property: &'static str,
        expected: &'static str,
    },

    #[error("{kind}.{property} expects a {expected} node, found {found}")]
    #[diagnostic(code(graphql::build::unexpected_node_kind))]
    UnexpectedNodeKind {
        kind: NodeKind,
        property: &'static str,
        expected: NodeKind,
        found: NodeKind,
    },
}

impl BuildError {
    pub(crate) fn missing(kind: NodeKind, property: &'static str) -> Self {
        Self::MissingRequiredProperty { kind, property }
    }

    pub(crate) fn invalid(kind: NodeKind, property: &'static str, expected: &'static str) -> Self {
        Self::InvalidPropertyValue {
            kind,
            property,
            expected,
        }
    }
}

/// Startup misconfiguration of the builder table.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RegistryError {
    #[error("builders `{first}` and `{second}` both claim kind {kind}")]
    #[diagnostic(code(graphql::registry::duplicate_builder))]
    DuplicateBuilder {
        kind: NodeKind,
        first: &'static str,
        second: &'static str,
    },
}
