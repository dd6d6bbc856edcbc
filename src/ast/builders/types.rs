//! Type references.

use super::unsupported;
use crate::ast::builder::{BuildContext, Builder, Fragment};
use crate::ast::nodes::*;
use crate::ast::{Node, NodeKind};
use crate::errors::BuildError;

pub struct TypeReferenceBuilder;

impl Builder for TypeReferenceBuilder {
    fn name(&self) -> &'static str {
        "type-references"
    }

    fn supports_kind(&self, kind: NodeKind) -> bool {
        matches!(
            kind,
            NodeKind::NamedType | NodeKind::ListType | NodeKind::NonNullType
        )
    }

    fn build(&self, f: &Fragment<'_>, cx: &BuildContext<'_>) -> Result<Node, BuildError> {
        let node: Node = match f.kind() {
            NodeKind::NamedType => NamedTypeNode {
                name: cx.require_typed(f, "name")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::ListType => ListTypeNode {
                ty: cx.require_boxed(f, "type")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::NonNullType => NonNullTypeNode {
                ty: cx.require_boxed(f, "type")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            _ => return Err(unsupported(self, f)),
        };
        Ok(node)
    }
}
