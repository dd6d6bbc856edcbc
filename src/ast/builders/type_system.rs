//! Schema and type definitions.

use super::{operation_type, unsupported};
use crate::ast::builder::{BuildContext, Builder, Fragment};
use crate::ast::nodes::*;
use crate::ast::{Node, NodeKind};
use crate::errors::BuildError;

pub struct TypeSystemBuilder;

impl Builder for TypeSystemBuilder {
    fn name(&self) -> &'static str {
        "type-system"
    }

    fn supports_kind(&self, kind: NodeKind) -> bool {
        matches!(
            kind,
            NodeKind::SchemaDefinition
                | NodeKind::OperationTypeDefinition
                | NodeKind::ScalarTypeDefinition
                | NodeKind::ObjectTypeDefinition
                | NodeKind::FieldDefinition
                | NodeKind::InputValueDefinition
                | NodeKind::InterfaceTypeDefinition
                | NodeKind::UnionTypeDefinition
                | NodeKind::EnumTypeDefinition
                | NodeKind::EnumValueDefinition
                | NodeKind::InputObjectTypeDefinition
                | NodeKind::DirectiveDefinition
        )
    }

    fn build(&self, f: &Fragment<'_>, cx: &BuildContext<'_>) -> Result<Node, BuildError> {
        let node: Node = match f.kind() {
            NodeKind::SchemaDefinition => SchemaDefinitionNode {
                directives: cx.build_many_typed(f, "directives")?,
                operation_types: cx.build_many_typed(f, "operationTypes")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::OperationTypeDefinition => OperationTypeDefinitionNode {
                operation: operation_type(f)?,
                ty: cx.require_typed(f, "type")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::ScalarTypeDefinition => ScalarTypeDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::ObjectTypeDefinition => ObjectTypeDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                interfaces: cx.build_many_typed(f, "interfaces")?,
                directives: cx.build_many_typed(f, "directives")?,
                fields: cx.build_many_typed(f, "fields")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::FieldDefinition => FieldDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                arguments: cx.build_many_typed(f, "arguments")?,
                ty: cx.require_boxed(f, "type")?,
                directives: cx.build_many_typed(f, "directives")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::InputValueDefinition => InputValueDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                ty: cx.require_boxed(f, "type")?,
                default_value: cx.build_boxed(f, "defaultValue")?,
                directives: cx.build_many_typed(f, "directives")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::InterfaceTypeDefinition => InterfaceTypeDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                fields: cx.build_many_typed(f, "fields")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::UnionTypeDefinition => UnionTypeDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                types: cx.build_many_typed(f, "types")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::EnumTypeDefinition => EnumTypeDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                values: cx.build_many_typed(f, "values")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::EnumValueDefinition => EnumValueDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::InputObjectTypeDefinition => InputObjectTypeDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                fields: cx.build_many_typed(f, "fields")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::DirectiveDefinition => DirectiveDefinitionNode {
                description: cx.build_typed(f, "description")?,
                name: cx.require_typed(f, "name")?,
                arguments: cx.build_many_typed(f, "arguments")?,
                locations: cx.build_many_typed(f, "locations")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            _ => return Err(unsupported(self, f)),
        };
        Ok(node)
    }
}
