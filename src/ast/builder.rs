//! # AST Builder Contract
//!
//! A [`Builder`] translates parse-tree fragments of the kinds it supports into
//! typed nodes. Builders never recurse on their own: every child fragment goes
//! back through the [`Director`] via the helpers on [`BuildContext`], so one
//! dispatch table governs the whole tree.
//!
//! ## Fragment shape
//! ```text
//! { "kind": "Field",
//!   "name": { "kind": "Name", "value": "hero" },
//!   "arguments": [ ... ],
//!   "loc": { "startToken": 2, "endToken": 6 } }
//! ```
//! A property holding JSON `null` counts as absent.
//!
//! ## Invariants
//! - Pure and stateless; never mutates input
//! - Either the whole node is built or the call fails, there are no partial nodes

use std::sync::Arc;

use serde_json::{Map, Value};

use super::{Director, Node, NodeKind, TypedNode};
use crate::errors::BuildError;
use crate::source::{Location, Source};

/// Location metadata key and its offset fields.
const LOCATION_KEY: &str = "loc";
const START_TOKEN_KEY: &str = "startToken";
const END_TOKEN_KEY: &str = "endToken";

// ============================================================================
// FRAGMENT
// ============================================================================

/// A parse-tree object whose `kind` tag has been resolved.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    kind: NodeKind,
    props: &'a Map<String, Value>,
}

impl<'a> Fragment<'a> {
    /// Reads the kind tag of a raw fragment.
    pub fn parse(raw: &'a Value) -> Result<Self, BuildError> {
        let props = raw.as_object().ok_or(BuildError::MalformedFragment)?;
        let tag = props
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(BuildError::MalformedFragment)?;
        let kind = NodeKind::from_tag(tag).ok_or_else(|| BuildError::UnknownNodeKind {
            kind: tag.to_string(),
        })?;
        Ok(Self { kind, props })
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Raw value at `prop`, if present and not `null`.
    pub fn get_one(&self, prop: &str) -> Option<&'a Value> {
        self.props.get(prop).filter(|v| !v.is_null())
    }

    /// Raw value at `prop`, or `default` when absent.
    pub fn get_one_or<'b>(&self, prop: &str, default: &'b Value) -> &'b Value
    where
        'a: 'b,
    {
        self.get_one(prop).unwrap_or(default)
    }

    pub fn get_str(&self, prop: &'static str) -> Result<Option<&'a str>, BuildError> {
        match self.get_one(prop) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| BuildError::invalid(self.kind, prop, "string")),
        }
    }

    pub fn require_str(&self, prop: &'static str) -> Result<&'a str, BuildError> {
        self.get_str(prop)?
            .ok_or_else(|| BuildError::missing(self.kind, prop))
    }

    pub fn get_bool_or(&self, prop: &'static str, default: bool) -> Result<bool, BuildError> {
        match self.get_one(prop) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| BuildError::invalid(self.kind, prop, "boolean")),
        }
    }

    pub fn require_bool(&self, prop: &'static str) -> Result<bool, BuildError> {
        match self.get_one(prop) {
            None => Err(BuildError::missing(self.kind, prop)),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| BuildError::invalid(self.kind, prop, "boolean")),
        }
    }
}

// ============================================================================
// BUILD CONTEXT
// ============================================================================

/// Per-call state handed to builders: the dispatch table and the document
/// being built.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    director: &'a Director,
    source: &'a Arc<Source>,
}

impl<'a> BuildContext<'a> {
    pub fn new(director: &'a Director, source: &'a Arc<Source>) -> Self {
        Self { director, source }
    }

    pub fn source(&self) -> &Arc<Source> {
        self.source
    }

    /// Builds the child at `prop` through the director; `None` when absent.
    pub fn build_one(&self, fragment: &Fragment<'_>, prop: &'static str) -> Result<Option<Node>, BuildError> {
        fragment
            .get_one(prop)
            .map(|child| self.director.build_with(child, self))
            .transpose()
    }

    /// Builds every child at `prop` in order; empty when absent.
    pub fn build_many(&self, fragment: &Fragment<'_>, prop: &'static str) -> Result<Vec<Node>, BuildError> {
        match fragment.get_one(prop) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|child| self.director.build_with(child, self))
                .collect(),
            Some(_) => Err(BuildError::invalid(fragment.kind(), prop, "array of fragments")),
        }
    }

    /// Location for fragments carrying both token offsets, else `None`.
    pub fn build_location(&self, fragment: &Fragment<'_>) -> Result<Option<Location>, BuildError> {
        let Some(meta) = fragment.get_one(LOCATION_KEY) else {
            return Ok(None);
        };
        let offset = |key: &str| meta.get(key).and_then(Value::as_u64);
        let (Some(start), Some(end)) = (offset(START_TOKEN_KEY), offset(END_TOKEN_KEY)) else {
            return Ok(None);
        };
        let invalid = || BuildError::invalid(fragment.kind(), LOCATION_KEY, "start <= end");
        let start = usize::try_from(start).map_err(|_| invalid())?;
        let end = usize::try_from(end).map_err(|_| invalid())?;
        Location::new(start, end, Arc::clone(self.source))
            .map(Some)
            .ok_or_else(invalid)
    }

    /// Builds a required child of any kind.
    pub fn require_node(&self, fragment: &Fragment<'_>, prop: &'static str) -> Result<Node, BuildError> {
        self.build_one(fragment, prop)?
            .ok_or_else(|| BuildError::missing(fragment.kind(), prop))
    }

    pub fn require_boxed(&self, fragment: &Fragment<'_>, prop: &'static str) -> Result<Box<Node>, BuildError> {
        self.require_node(fragment, prop).map(Box::new)
    }

    pub fn build_boxed(&self, fragment: &Fragment<'_>, prop: &'static str) -> Result<Option<Box<Node>>, BuildError> {
        Ok(self.build_one(fragment, prop)?.map(Box::new))
    }

    /// Builds an optional child that must be of type `T`.
    pub fn build_typed<T: TypedNode>(&self, fragment: &Fragment<'_>, prop: &'static str) -> Result<Option<T>, BuildError> {
        self.build_one(fragment, prop)?
            .map(|node| downcast(fragment.kind(), prop, node))
            .transpose()
    }

    /// Builds a required child that must be of type `T`.
    pub fn require_typed<T: TypedNode>(&self, fragment: &Fragment<'_>, prop: &'static str) -> Result<T, BuildError> {
        self.build_typed(fragment, prop)?
            .ok_or_else(|| BuildError::missing(fragment.kind(), prop))
    }

    /// Builds a sequence whose elements must all be of type `T`.
    pub fn build_many_typed<T: TypedNode>(&self, fragment: &Fragment<'_>, prop: &'static str) -> Result<Vec<T>, BuildError> {
        self.build_many(fragment, prop)?
            .into_iter()
            .map(|node| downcast(fragment.kind(), prop, node))
            .collect()
    }
}

fn downcast<T: TypedNode>(kind: NodeKind, property: &'static str, node: Node) -> Result<T, BuildError> {
    T::from_node(node).map_err(|found| BuildError::UnexpectedNodeKind {
        kind,
        property,
        expected: T::KIND,
        found: found.kind(),
    })
}

// ============================================================================
// BUILDER TRAIT
// ============================================================================

/// Kind-specific translator from a fragment to a typed node.
pub trait Builder: Send + Sync {
    /// Identifies the builder in registry errors and logs.
    fn name(&self) -> &'static str;

    fn supports_kind(&self, kind: NodeKind) -> bool;

    fn build(&self, fragment: &Fragment<'_>, cx: &BuildContext<'_>) -> Result<Node, BuildError>;
}
