//! Structured, location-aware GraphQL errors.
//!
//! A [`GraphQLError`] is data, not control flow: validators and executors
//! create one at the error site from whatever they know (AST nodes, a source,
//! raw offsets, a response path), collect many of them, and serialize them
//! into the response's `errors` list.
//!
//! # Resolution order
//!
//! Missing inputs are derived in a fixed order, one resolver per field:
//!
//! 1. **nodes**: absent entries are dropped.
//! 2. **source**: the explicit source, else the source of the first node that
//!    carries a location.
//! 3. **positions**: the explicit offsets, else the start offset of every
//!    located node. An empty list collapses to `None`.
//! 4. **locations**: explicit positions mapped through the resolved source;
//!    otherwise one location per located node, computed against *that node's*
//!    own source so errors spanning several documents stay accurate.
//!
//! `path`, `extensions` and the cause are stored as given.

use std::fmt;
use std::sync::Arc;

use miette::{LabeledSpan, SourceCode};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::ast::Node;
use crate::errors::BuildError;
use crate::source::{Source, SourceLocation};

pub mod printer;

pub use printer::{print_error, print_to_stderr, write_error_colored};

/// Opaque extension data attached to a formatted error.
pub type Extensions = Map<String, Value>;

/// Underlying error that triggered a [`GraphQLError`].
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// RESPONSE PATH
// ============================================================================

/// One step of a response path: a field name or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

// ============================================================================
// GRAPHQL ERROR
// ============================================================================

/// An error reported against a GraphQL document or execution result.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GraphQLError {
    message: String,
    nodes: Vec<Node>,
    document: Option<Arc<Source>>,
    positions: Option<Vec<usize>>,
    locations: Option<Vec<SourceLocation>>,
    explicit_positions: bool,
    path: Option<Vec<PathSegment>>,
    extensions: Option<Extensions>,
    #[source]
    cause: Option<Cause>,
}

/// The wire shape of an error in a GraphQL response.
///
/// `locations` is always written (possibly `null`); `path` and `extensions`
/// are left out entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedError {
    pub message: String,
    pub locations: Option<Vec<SourceLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl GraphQLError {
    /// An error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::builder(message).build()
    }

    pub fn builder(message: impl Into<String>) -> GraphQLErrorBuilder {
        GraphQLErrorBuilder::new(message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Nodes the error refers to; never contains gaps, possibly empty.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The document the first location refers to.
    ///
    /// When the error spans several documents this only describes the first.
    pub fn document(&self) -> Option<&Arc<Source>> {
        self.document.as_ref()
    }

    pub fn has_source(&self) -> bool {
        self.document.is_some()
    }

    /// Byte offsets within [`document`](Self::document); never an empty list.
    pub fn positions(&self) -> Option<&[usize]> {
        self.positions.as_deref()
    }

    /// Resolved locations; an empty result is stored as `None`, never `[]`.
    pub fn locations(&self) -> Option<&[SourceLocation]> {
        self.locations.as_deref()
    }

    pub fn has_locations(&self) -> bool {
        self.locations.as_ref().is_some_and(|l| !l.is_empty())
    }

    /// Locations as written to the wire, `None` when there are none.
    pub fn locations_as_array(&self) -> Option<Vec<SourceLocation>> {
        self.locations.clone().filter(|l| !l.is_empty())
    }

    pub fn path(&self) -> Option<&[PathSegment]> {
        self.path.as_deref()
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    /// Replaces the extension data, e.g. when an error handler adds a code.
    pub fn with_extensions(mut self, extensions: Option<Extensions>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn original_error_message(&self) -> Option<String> {
        self.cause.as_ref().map(|cause| cause.to_string())
    }

    /// The response-ready shape of this error.
    pub fn to_array(&self) -> FormattedError {
        FormattedError {
            message: self.message.clone(),
            locations: self.locations_as_array(),
            path: self.path.clone(),
            extensions: self.extensions.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_array())
    }

    /// Message followed by a source excerpt for every location.
    pub fn print(&self) -> String {
        print_error(self)
    }
}

impl Serialize for GraphQLError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl From<BuildError> for GraphQLError {
    fn from(err: BuildError) -> Self {
        Self::builder(err.to_string()).cause(err).build()
    }
}

impl miette::Diagnostic for GraphQLError {
    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.document
            .as_deref()
            .map(|source| source as &dyn SourceCode)
    }

    /// Labels are drawn against [`document`](GraphQLError::document) only;
    /// nodes from other documents are left out.
    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let document = self.document.as_ref()?;
        if self.explicit_positions {
            let positions = self.positions.as_ref()?;
            return Some(Box::new(
                positions
                    .iter()
                    .map(|&offset| LabeledSpan::at_offset(offset, "here")),
            ));
        }
        Some(Box::new(
            self.nodes
                .iter()
                .filter_map(Node::location)
                .filter(move |loc| loc.source() == document)
                .map(|loc| LabeledSpan::new_with_span(Some("here".to_string()), loc.to_source_span())),
        ))
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Collects whatever the error site knows before resolving the rest.
#[derive(Default)]
pub struct GraphQLErrorBuilder {
    message: String,
    nodes: Vec<Option<Node>>,
    source: Option<Arc<Source>>,
    positions: Option<Vec<usize>>,
    path: Option<Vec<PathSegment>>,
    extensions: Option<Extensions>,
    cause: Option<Cause>,
}

impl GraphQLErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Adds a single node.
    pub fn node(mut self, node: impl Into<Option<Node>>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Adds nodes in order; `None` entries are dropped during resolution.
    pub fn nodes<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Option<Node>>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn source(mut self, source: Arc<Source>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn positions(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.positions = Some(positions.into_iter().collect());
        self
    }

    pub fn path<I, P>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathSegment>,
    {
        self.path = Some(path.into_iter().map(Into::into).collect());
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Runs the resolvers and freezes the error.
    pub fn build(self) -> GraphQLError {
        let explicit_positions = self.positions.is_some();
        let nodes = resolve_nodes(self.nodes);
        let document = resolve_source(self.source, &nodes);
        let positions = resolve_positions(self.positions, &nodes);
        let locations = resolve_locations(
            positions.as_deref().filter(|_| explicit_positions),
            document.as_deref(),
            &nodes,
        );

        GraphQLError {
            message: self.message,
            nodes,
            document,
            positions,
            locations,
            explicit_positions,
            path: self.path,
            extensions: self.extensions,
            cause: self.cause,
        }
    }
}

fn resolve_nodes(nodes: Vec<Option<Node>>) -> Vec<Node> {
    nodes.into_iter().flatten().collect()
}

fn resolve_source(explicit: Option<Arc<Source>>, nodes: &[Node]) -> Option<Arc<Source>> {
    explicit.or_else(|| {
        nodes
            .iter()
            .find_map(Node::location)
            .map(|loc| Arc::clone(loc.source()))
    })
}

fn resolve_positions(explicit: Option<Vec<usize>>, nodes: &[Node]) -> Option<Vec<usize>> {
    let positions = match explicit {
        Some(positions) => positions,
        None => nodes
            .iter()
            .filter_map(Node::location)
            .map(|loc| loc.start())
            .collect(),
    };
    (!positions.is_empty()).then_some(positions)
}

/// `explicit_positions` is only `Some` when the caller supplied offsets;
/// node-derived offsets resolve per node instead.
fn resolve_locations(
    explicit_positions: Option<&[usize]>,
    source: Option<&Source>,
    nodes: &[Node],
) -> Option<Vec<SourceLocation>> {
    let locations: Vec<SourceLocation> = match (explicit_positions, source) {
        (Some(positions), Some(source)) => positions
            .iter()
            .map(|&offset| SourceLocation::from_source(source, offset))
            .collect(),
        _ => nodes
            .iter()
            .filter_map(Node::location)
            .map(|loc| loc.start_location())
            .collect(),
    };
    (!locations.is_empty()).then_some(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NameNode;
    use crate::source::Location;

    fn located(value: &str, start: usize, source: &Arc<Source>) -> Node {
        NameNode {
            value: value.into(),
            loc: Location::new(start, start + value.len(), Arc::clone(source)),
        }
        .into()
    }

    #[test]
    fn resolve_nodes_drops_gaps() {
        let nodes = resolve_nodes(vec![None, Some(NameNode::new("a").into()), None]);
        assert_eq!(nodes.len(), 1);
        assert!(resolve_nodes(vec![]).is_empty());
    }

    #[test]
    fn resolve_source_prefers_explicit_then_first_located_node() {
        let a = Source::new("{ a }", "a.graphql").shared();
        let b = Source::new("{ b }", "b.graphql").shared();
        let nodes = vec![NameNode::new("bare").into(), located("b", 2, &b)];

        assert_eq!(resolve_source(Some(a.clone()), &nodes), Some(a));
        assert_eq!(resolve_source(None, &nodes), Some(b));
        assert_eq!(resolve_source(None, &[]), None);
    }

    #[test]
    fn resolve_positions_collapses_empty() {
        let src = Source::from_body("{ hero }").shared();
        let nodes = vec![located("hero", 2, &src), NameNode::new("x").into()];

        assert_eq!(resolve_positions(None, &nodes), Some(vec![2]));
        assert_eq!(resolve_positions(Some(vec![]), &nodes), None);
        assert_eq!(resolve_positions(Some(vec![7]), &nodes), Some(vec![7]));
        assert_eq!(resolve_positions(None, &[Node::from(NameNode::new("x"))]), None);
    }

    #[test]
    fn resolve_locations_uses_each_nodes_own_source() {
        let first = Source::new("{ a }", "first").shared();
        let second = Source::new("\n\n  b", "second").shared();
        let nodes = vec![located("a", 2, &first), located("b", 4, &second)];

        let locations = resolve_locations(None, Some(first.as_ref()), &nodes).unwrap();
        assert_eq!(
            locations,
            vec![SourceLocation::new(1, 3), SourceLocation::new(3, 3)]
        );
    }

    #[test]
    fn resolve_locations_maps_explicit_positions() {
        let src = Source::from_body("ab\ncd");
        let locations = resolve_locations(Some(&[0, 4][..]), Some(&src), &[]).unwrap();
        assert_eq!(
            locations,
            vec![SourceLocation::new(1, 1), SourceLocation::new(2, 2)]
        );
        assert_eq!(resolve_locations(None, None, &[]), None);
    }

    #[test]
    fn labels_stay_on_the_errors_own_document() {
        use miette::Diagnostic;

        let first = Source::new("{ a }", "first").shared();
        let second = Source::new("\n\n  b", "second").shared();
        let error = GraphQLError::builder("x")
            .nodes([located("a", 2, &first), located("b", 4, &second)])
            .build();

        let labels: Vec<_> = error.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!((labels[0].offset(), labels[0].len()), (2, 1));

        let error = GraphQLError::builder("x")
            .node(located("b", 4, &second))
            .source(Arc::clone(&first))
            .positions([0, 3])
            .build();
        let offsets: Vec<_> = error.labels().unwrap().map(|l| l.offset()).collect();
        assert_eq!(offsets, vec![0, 3]);
    }

    #[test]
    fn build_errors_convert_with_cause() {
        let err: GraphQLError = BuildError::UnknownNodeKind {
            kind: "Bogus".into(),
        }
        .into();
        assert_eq!(err.message(), "unknown node kind `Bogus`");
        assert_eq!(
            err.original_error_message().as_deref(),
            Some("unknown node kind `Bogus`")
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
