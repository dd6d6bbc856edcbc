//! GraphQL front end: turns generic parse-tree fragments into a typed AST and
//! reports location-aware errors against the documents they came from.

pub use crate::ast::{Director, Node, NodeKind};
pub use crate::diagnostics::{FormattedError, GraphQLError, PathSegment};
pub use crate::errors::{BuildError, RegistryError};
pub use crate::source::{Location, Source, SourceLocation};

pub mod ast;
pub mod diagnostics;
pub mod errors;
pub mod source;
