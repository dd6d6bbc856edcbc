//! Schema and type extensions. Same shapes as the definitions, minus the
//! description.

use super::unsupported;
use crate::ast::builder::{BuildContext, Builder, Fragment};
use crate::ast::nodes::*;
use crate::ast::{Node, NodeKind};
use crate::errors::BuildError;

pub struct TypeExtensionBuilder;

impl Builder for TypeExtensionBuilder {
    fn name(&self) -> &'static str {
        "type-extensions"
    }

    fn supports_kind(&self, kind: NodeKind) -> bool {
        matches!(
            kind,
            NodeKind::SchemaExtension
                | NodeKind::ScalarTypeExtension
                | NodeKind::ObjectTypeExtension
                | NodeKind::InterfaceTypeExtension
                | NodeKind::UnionTypeExtension
                | NodeKind::EnumTypeExtension
                | NodeKind::InputObjectTypeExtension
        )
    }

    fn build(&self, f: &Fragment<'_>, cx: &BuildContext<'_>) -> Result<Node, BuildError> {
        let node: Node = match f.kind() {
            NodeKind::SchemaExtension => SchemaExtensionNode {
                directives: cx.build_many_typed(f, "directives")?,
                operation_types: cx.build_many_typed(f, "operationTypes")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::ScalarTypeExtension => ScalarTypeExtensionNode {
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::ObjectTypeExtension => ObjectTypeExtensionNode {
                name: cx.require_typed(f, "name")?,
                interfaces: cx.build_many_typed(f, "interfaces")?,
                directives: cx.build_many_typed(f, "directives")?,
                fields: cx.build_many_typed(f, "fields")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::InterfaceTypeExtension => InterfaceTypeExtensionNode {
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                fields: cx.build_many_typed(f, "fields")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::UnionTypeExtension => UnionTypeExtensionNode {
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                types: cx.build_many_typed(f, "types")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::EnumTypeExtension => EnumTypeExtensionNode {
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                values: cx.build_many_typed(f, "values")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::InputObjectTypeExtension => InputObjectTypeExtensionNode {
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                fields: cx.build_many_typed(f, "fields")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            _ => return Err(unsupported(self, f)),
        };
        Ok(node)
    }
}
