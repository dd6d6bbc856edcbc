//! Kind-to-builder dispatch.
//!
//! ## Registry Invariant
//! The builder table is validated once when the [`Director`] is created and
//! never changes afterwards. [`Director::standard`] is the process-wide table
//! holding every built-in builder; it is safe to share across threads because
//! a build call keeps all of its state (the document's [`Source`]) on the
//! stack.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{debug, trace};

use super::builder::{BuildContext, Builder, Fragment};
use super::builders::standard_builders;
use super::{Node, NodeKind};
use crate::errors::{BuildError, RegistryError};
use crate::source::Source;

static STANDARD: Lazy<Director> = Lazy::new(|| match Director::new(standard_builders()) {
    Ok(director) => director,
    Err(err) => panic!("built-in builder table is inconsistent: {err}"),
});

pub struct Director {
    builders: Vec<Box<dyn Builder>>,
    table: HashMap<NodeKind, usize>,
}

impl Director {
    /// Validates and freezes a builder table.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateBuilder`] if two builders claim the
    /// same kind.
    pub fn new(builders: Vec<Box<dyn Builder>>) -> Result<Self, RegistryError> {
        let mut table: HashMap<NodeKind, usize> = HashMap::new();
        for &kind in NodeKind::ALL {
            for (index, builder) in builders.iter().enumerate() {
                if !builder.supports_kind(kind) {
                    continue;
                }
                if let Some(&first) = table.get(&kind) {
                    return Err(RegistryError::DuplicateBuilder {
                        kind,
                        first: builders[first].name(),
                        second: builder.name(),
                    });
                }
                table.insert(kind, index);
            }
        }

        debug!(
            builders = builders.len(),
            kinds = table.len(),
            "builder registry ready"
        );
        Ok(Self { builders, table })
    }

    /// The shared registry of built-in builders, covering every [`NodeKind`].
    pub fn standard() -> &'static Director {
        &STANDARD
    }

    pub fn supports(&self, kind: NodeKind) -> bool {
        self.table.contains_key(&kind)
    }

    /// Builds a typed tree from a parse-tree fragment of `source`.
    ///
    /// # Errors
    /// Fails on the first fragment that cannot be built; no partial tree is
    /// returned.
    pub fn build(&self, fragment: &Value, source: &Arc<Source>) -> Result<Node, BuildError> {
        let cx = BuildContext::new(self, source);
        let result = self.build_with(fragment, &cx);
        if let Err(err) = &result {
            debug!(source = source.name(), error = %err, "AST build failed");
        }
        result
    }

    pub(crate) fn build_with(&self, raw: &Value, cx: &BuildContext<'_>) -> Result<Node, BuildError> {
        let fragment = Fragment::parse(raw)?;
        let builder = self
            .table
            .get(&fragment.kind())
            .map(|&index| &self.builders[index])
            .ok_or_else(|| BuildError::UnknownNodeKind {
                kind: fragment.kind().as_str().to_string(),
            })?;

        trace!(kind = %fragment.kind(), builder = builder.name(), "dispatching fragment");
        builder.build(&fragment, cx)
    }
}

impl fmt::Debug for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Director")
            .field(
                "builders",
                &self.builders.iter().map(|b| b.name()).collect::<Vec<_>>(),
            )
            .field("kinds", &self.table.len())
            .finish()
    }
}
